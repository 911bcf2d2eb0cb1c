use wms_api::{Client, Request, WmsApiError};

#[tokio::main]
pub async fn main() -> Result<(), WmsApiError> {
    let client = Client::default();

    let req = Request::onhand()
        .with_organization("AMS")
        .get()
        .subinventory("STORES");

    let res = client.send(req).await?;
    println!("{} on-hand rows", res.into_items().len());
    Ok(())
}
