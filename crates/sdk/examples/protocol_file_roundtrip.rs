use hiero_sdk::{
    FileContentsRequest, FileCreateRequest, FileInfoRequest, HttpProtocolClient,
    ProtocolLayerClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let relay = std::env::var("HIERO_RELAY_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:50211/".to_string());

    let client = HttpProtocolClient::new(relay)?;

    let created = client
        .execute_file_create_transaction(FileCreateRequest::new(b"Hello Hiero!".to_vec()))
        .await?;
    println!("Created file {} (tx {})", created.file_id, created.transaction_id);

    let info = client
        .execute_file_info_query(FileInfoRequest::new(created.file_id))
        .await?;
    println!("Size: {} bytes, deleted: {}", info.size, info.deleted);

    let contents = client
        .execute_file_contents_query(FileContentsRequest::new(created.file_id))
        .await?;
    println!("Contents: {}", String::from_utf8_lossy(&contents.contents));

    Ok(())
}
