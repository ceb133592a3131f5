mod error;
pub mod file;
pub mod network;
mod protocol;

pub use crate::error::SdkError;
pub use crate::file::*;
pub use crate::network::{HieroNetwork, NetworkNode, NetworkSettings};
pub use crate::protocol::ProtocolLayerClient;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use hiero_types::FileId;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Protocol layer client that submits file transactions to a node relay over JSON/HTTP.
///
/// Queries go to the mirror node when one is set explicitly, otherwise to the relay.
#[derive(Clone, Debug)]
pub struct HttpProtocolClient {
    relay_url: Url,
    query_url: Url,
    http: Client,
}

impl HttpProtocolClient {
    /// Create a new client with the provided relay URL (e.g. `http://127.0.0.1:50211/`).
    pub fn new(relay_url: impl AsRef<str>) -> Result<Self, SdkError> {
        Self::with_http_client(relay_url, default_http_client()?)
    }

    /// Use an existing reqwest client (useful for custom TLS or middleware).
    pub fn with_http_client(relay_url: impl AsRef<str>, http: Client) -> Result<Self, SdkError> {
        let relay_url = normalize_base_url(relay_url.as_ref())?;
        Ok(Self {
            query_url: relay_url.clone(),
            relay_url,
            http,
        })
    }

    /// Build a client for the first configured node of `settings`.
    ///
    /// Queries stay on the relay unless `mirror_node` is set explicitly; the
    /// public mirror of a known network does not serve the relay's file routes.
    pub fn from_settings(settings: &NetworkSettings) -> Result<Self, SdkError> {
        settings.validate()?;
        // validate() rejects an empty node list
        let node = &settings.nodes[0];

        let client = Self::new(node.relay_url())?;
        match &settings.mirror_node {
            Some(mirror) => client.with_mirror_node(mirror),
            None => Ok(client),
        }
    }

    /// Route queries to a mirror node instead of the relay.
    pub fn with_mirror_node(mut self, mirror_url: impl AsRef<str>) -> Result<Self, SdkError> {
        self.query_url = normalize_base_url(mirror_url.as_ref())?;
        Ok(self)
    }

    pub fn relay_url(&self) -> &Url {
        &self.relay_url
    }

    pub fn query_url(&self) -> &Url {
        &self.query_url
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        let url = self.query_url.join(path)?;
        debug!(%url, "file query");
        let response = self.http.get(url).send().await?;
        Self::map_response(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, SdkError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.relay_url.join(path)?;
        debug!(%url, "file transaction");
        let response = self.http.post(url).json(body).send().await?;
        Self::map_response(response).await
    }

    async fn map_response<T>(response: Response) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::map_api_error(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    async fn map_api_error(response: Response) -> SdkError {
        let status = response.status().as_u16();
        let bytes = response.bytes().await.unwrap_or_default();
        decode_api_error(status, &bytes)
    }
}

#[async_trait]
impl ProtocolLayerClient for HttpProtocolClient {
    async fn execute_file_create_transaction(
        &self,
        request: FileCreateRequest,
    ) -> Result<FileCreateResult, SdkError> {
        let payload = OutgoingCreateRequest::from(request);
        self.post_json::<_, CreateResponse>("file/create", &payload)
            .await?
            .try_into()
    }

    async fn execute_file_append_transaction(
        &self,
        request: FileAppendRequest,
    ) -> Result<FileAppendResult, SdkError> {
        let file_id = request.file_id;
        let payload = OutgoingAppendRequest::from(request);
        let response = self
            .post_json::<_, TransactionResponse>("file/append", &payload)
            .await?;
        Ok(FileAppendResult {
            transaction_id: response.transaction_id,
            file_id,
        })
    }

    async fn execute_file_update_transaction(
        &self,
        request: FileUpdateRequest,
    ) -> Result<FileUpdateResult, SdkError> {
        let payload = OutgoingUpdateRequest::from(request);
        let response = self
            .post_json::<_, TransactionResponse>("file/update", &payload)
            .await?;
        Ok(FileUpdateResult {
            transaction_id: response.transaction_id,
        })
    }

    async fn execute_file_delete_transaction(
        &self,
        request: FileDeleteRequest,
    ) -> Result<FileDeleteResult, SdkError> {
        let payload = OutgoingDeleteRequest {
            file_id: request.file_id,
        };
        let response = self
            .post_json::<_, TransactionResponse>("file/delete", &payload)
            .await?;
        Ok(FileDeleteResult {
            transaction_id: response.transaction_id,
        })
    }

    async fn execute_file_info_query(
        &self,
        request: FileInfoRequest,
    ) -> Result<FileInfoResponse, SdkError> {
        let path = format!("file/{}", request.file_id);
        Ok(self.get_json::<FileInfoView>(&path).await?.into())
    }

    async fn execute_file_contents_query(
        &self,
        request: FileContentsRequest,
    ) -> Result<FileContentsResponse, SdkError> {
        let path = format!("file/{}/contents", request.file_id);
        self.get_json::<FileContentsView>(&path).await?.try_into()
    }
}

fn default_http_client() -> Result<Client, SdkError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

fn normalize_base_url(raw: &str) -> Result<Url, SdkError> {
    let mut url = Url::parse(raw).map_err(|_| SdkError::InvalidBaseUrl(raw.to_string()))?;
    if !url.path().ends_with('/') {
        let mut path = url.path().trim_end_matches('/').to_owned();
        path.push('/');
        url.set_path(&path);
    }
    Ok(url)
}

fn decode_api_error(status: u16, bytes: &[u8]) -> SdkError {
    if let Ok(api_error) = serde_json::from_slice::<ApiErrorResponse>(bytes) {
        return SdkError::server_error(
            status,
            api_error.code.unwrap_or_else(|| "unknown".into()),
            api_error.message.unwrap_or_else(|| "request failed".into()),
        );
    }
    let text = String::from_utf8_lossy(bytes).to_string();
    SdkError::server_error(status, "http_error", text)
}

fn decode_contents(raw: &str) -> Result<Vec<u8>, SdkError> {
    general_purpose::STANDARD
        .decode(raw)
        .map_err(|err| SdkError::parse_error(format!("invalid base64 file contents: {err}")))
}

// --- wire views ---

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
struct OutgoingCreateRequest {
    contents: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
struct OutgoingAppendRequest {
    file_id: FileId,
    contents: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
struct OutgoingUpdateRequest {
    file_id: FileId,
    #[serde(skip_serializing_if = "Option::is_none")]
    contents: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
struct OutgoingDeleteRequest {
    file_id: FileId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct CreateResponse {
    transaction_id: String,
    file_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct TransactionResponse {
    transaction_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct FileInfoView {
    file_id: FileId,
    size: u64,
    #[serde(default)]
    expiration_time: Option<DateTime<Utc>>,
    #[serde(default)]
    deleted: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct FileContentsView {
    file_id: FileId,
    contents: String,
}

impl From<FileCreateRequest> for OutgoingCreateRequest {
    fn from(req: FileCreateRequest) -> Self {
        Self {
            contents: general_purpose::STANDARD.encode(&req.contents),
            expiration_time: req.expiration_time,
        }
    }
}

impl From<FileAppendRequest> for OutgoingAppendRequest {
    fn from(req: FileAppendRequest) -> Self {
        Self {
            file_id: req.file_id,
            contents: general_purpose::STANDARD.encode(&req.contents),
        }
    }
}

impl From<FileUpdateRequest> for OutgoingUpdateRequest {
    fn from(req: FileUpdateRequest) -> Self {
        Self {
            file_id: req.file_id,
            contents: req.contents.map(|c| general_purpose::STANDARD.encode(c)),
            expiration_time: req.expiration_time,
        }
    }
}

impl TryFrom<CreateResponse> for FileCreateResult {
    type Error = SdkError;

    fn try_from(value: CreateResponse) -> Result<Self, Self::Error> {
        let file_id = value.file_id.parse::<FileId>().map_err(|err| {
            SdkError::parse_error(format!("invalid file id `{}`: {err}", value.file_id))
        })?;
        Ok(Self {
            transaction_id: value.transaction_id,
            file_id,
        })
    }
}

impl From<FileInfoView> for FileInfoResponse {
    fn from(value: FileInfoView) -> Self {
        Self {
            file_id: value.file_id,
            size: value.size,
            expiration_time: value.expiration_time,
            deleted: value.deleted,
        }
    }
}

impl TryFrom<FileContentsView> for FileContentsResponse {
    type Error = SdkError;

    fn try_from(value: FileContentsView) -> Result<Self, Self::Error> {
        Ok(Self {
            file_id: value.file_id,
            contents: decode_contents(&value.contents)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiero_types::AccountId;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = HttpProtocolClient::new("http://127.0.0.1:50211/api").unwrap();
        assert_eq!(client.relay_url().as_str(), "http://127.0.0.1:50211/api/");
        assert_eq!(client.query_url(), client.relay_url());
        assert_eq!(
            client.relay_url().join("file/create").unwrap().as_str(),
            "http://127.0.0.1:50211/api/file/create"
        );
    }

    #[test]
    fn invalid_base_url_rejected() {
        let err = HttpProtocolClient::new("not a url").err().unwrap();
        assert!(matches!(err, SdkError::InvalidBaseUrl(raw) if raw == "not a url"));
    }

    #[test]
    fn settings_select_first_node_and_keep_queries_on_relay() {
        let settings = NetworkSettings {
            name: "testnet".into(),
            nodes: vec![
                NetworkNode {
                    ip: "10.0.0.1".into(),
                    port: 50211,
                    account: AccountId::from_num(3),
                },
                NetworkNode {
                    ip: "10.0.0.2".into(),
                    port: 50211,
                    account: AccountId::from_num(4),
                },
            ],
            mirror_node: None,
        };

        let client = HttpProtocolClient::from_settings(&settings).unwrap();
        assert_eq!(client.relay_url().as_str(), "http://10.0.0.1:50211/");
        assert_eq!(client.query_url(), client.relay_url());
        assert_eq!(
            client.query_url().join("file/0.0.5").unwrap().as_str(),
            "http://10.0.0.1:50211/file/0.0.5"
        );
    }

    #[test]
    fn explicit_mirror_node_receives_queries() {
        let settings = NetworkSettings {
            name: "testnet".into(),
            nodes: vec![NetworkNode {
                ip: "10.0.0.1".into(),
                port: 50211,
                account: AccountId::from_num(3),
            }],
            mirror_node: Some("http://mirror.local:5551".into()),
        };

        let client = HttpProtocolClient::from_settings(&settings).unwrap();
        assert_eq!(client.relay_url().as_str(), "http://10.0.0.1:50211/");
        assert_eq!(client.query_url().as_str(), "http://mirror.local:5551/");
    }

    #[test]
    fn settings_without_nodes_fail_before_indexing() {
        let err = HttpProtocolClient::from_settings(&NetworkSettings::default()).unwrap_err();
        assert!(matches!(err, SdkError::Config(msg) if msg.contains("no nodes")));
    }

    #[test]
    fn shipped_testnet_config_queries_the_local_relay() {
        let path =
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/testnet.toml");
        let env = config::Environment::with_prefix(network::ENV_PREFIX)
            .source(Some(std::collections::HashMap::new()));
        let settings = NetworkSettings::load_with_env(Some(&path), env).unwrap();

        let client = HttpProtocolClient::from_settings(&settings).unwrap();
        assert_eq!(
            client.query_url().join("file/0.0.5").unwrap().as_str(),
            "http://127.0.0.1:50211/file/0.0.5"
        );
        assert_eq!(
            client.relay_url().join("file/create").unwrap().as_str(),
            "http://127.0.0.1:50211/file/create"
        );
    }

    #[test]
    fn custom_network_queries_the_relay() {
        let settings = NetworkSettings {
            name: "local".into(),
            nodes: vec![NetworkNode {
                ip: "127.0.0.1".into(),
                port: 8080,
                account: AccountId::from_num(3),
            }],
            mirror_node: None,
        };
        let client = HttpProtocolClient::from_settings(&settings).unwrap();
        assert_eq!(client.query_url(), client.relay_url());
    }

    #[test]
    fn create_payload_is_base64_and_rfc3339() {
        let when = DateTime::parse_from_rfc3339("2030-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let payload = OutgoingCreateRequest::from(
            FileCreateRequest::new(b"Hello Hiero!".to_vec()).with_expiration(when),
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["contents"], "SGVsbG8gSGllcm8h");
        assert_eq!(json["expiration_time"], "2030-01-02T03:04:05Z");

        let payload = OutgoingCreateRequest::from(FileCreateRequest::new(Vec::new()));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["contents"], "");
        assert!(json.get("expiration_time").is_none());
    }

    #[test]
    fn update_payload_omits_absent_fields() {
        let req = FileUpdateRequest::contents(FileId::from_num(9), b"x".to_vec());
        let json = serde_json::to_value(OutgoingUpdateRequest::from(req)).unwrap();
        assert_eq!(json["file_id"], "0.0.9");
        assert_eq!(json["contents"], "eA==");
        assert!(json.get("expiration_time").is_none());
    }

    #[test]
    fn create_response_parses_file_id() {
        let raw = r#"{"transaction_id":"0.0.2@1700000000.1","file_id":"0.0.1234"}"#;
        let view: CreateResponse = serde_json::from_str(raw).unwrap();
        let result = FileCreateResult::try_from(view).unwrap();
        assert_eq!(result.file_id, FileId::from_num(1234));

        let view = CreateResponse {
            transaction_id: "t".into(),
            file_id: "garbage".into(),
        };
        assert!(matches!(
            FileCreateResult::try_from(view),
            Err(SdkError::Parse(_))
        ));
    }

    #[test]
    fn info_and_contents_views_decode() {
        let raw = r#"{"file_id":"0.0.5","size":12,"deleted":true}"#;
        let info: FileInfoResponse = serde_json::from_str::<FileInfoView>(raw).unwrap().into();
        assert_eq!(info.size, 12);
        assert!(info.deleted);
        assert_eq!(info.expiration_time, None);

        let raw = r#"{"file_id":"0.0.5","contents":"SGVsbG8="}"#;
        let view: FileContentsView = serde_json::from_str(raw).unwrap();
        let contents = FileContentsResponse::try_from(view).unwrap();
        assert_eq!(contents.contents, b"Hello");

        let view = FileContentsView {
            file_id: FileId::from_num(5),
            contents: "%%%".into(),
        };
        assert!(FileContentsResponse::try_from(view).is_err());
    }

    #[test]
    fn api_errors_keep_server_code() {
        let err = decode_api_error(404, br#"{"code":"INVALID_FILE_ID","message":"no such file"}"#);
        match err {
            SdkError::ServerError {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, "INVALID_FILE_ID");
                assert_eq!(message, "no such file");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = decode_api_error(502, b"bad gateway");
        assert!(matches!(err, SdkError::ServerError { code, .. } if code == "http_error"));
    }
}
