use anyhow::Result;

use crate::{build_services, load_config};

pub(crate) async fn run(id: i64) -> Result<()> {
    let services = build_services(&load_config()?).await?;
    let check = services.checks.run_check(id).await?;
    println!("{}", serde_json::to_string_pretty(&check)?);
    Ok(())
}
