use anyhow::Result;

use crate::{build_services, load_config};

pub(crate) async fn add(raw: &str) -> Result<()> {
    let services = build_services(&load_config()?).await?;
    let added = services.urls.add_url(raw).await?;
    if added.already_existed {
        tracing::info!(id = added.id(), "Page already exists");
    } else {
        tracing::info!(id = added.id(), "Page successfully added");
    }
    println!("{}", serde_json::to_string_pretty(&added)?);
    Ok(())
}

pub(crate) async fn list() -> Result<()> {
    let services = build_services(&load_config()?).await?;
    let listings = services.urls.list_urls().await?;
    println!("{}", serde_json::to_string_pretty(&listings)?);
    Ok(())
}

pub(crate) async fn show(id: i64) -> Result<()> {
    let services = build_services(&load_config()?).await?;
    let detail = services.urls.get_url_detail(id).await?;
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}
