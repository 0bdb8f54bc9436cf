//! OpenAPI command - Prints the generated API document.

use utoipa::OpenApi;

use crate::api::ApiDoc;
use crate::errors::AppResult;

/// Execute the openapi command
pub async fn execute() -> AppResult<()> {
    let document = ApiDoc::openapi().to_pretty_json()?;
    println!("{}", document);
    Ok(())
}
