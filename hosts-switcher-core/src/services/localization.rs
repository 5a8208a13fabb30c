//! Language table bootstrap

use crate::error::CoreResult;
use crate::services::AgentContext;
use crate::types::LangTable;

/// Load the language table for the user's preferred language.
///
/// `getLang` depends on the answer of `getPref`, so the two requests are
/// strictly sequential.
pub async fn load_language(ctx: &AgentContext, default_language: &str) -> CoreResult<LangTable> {
    let pref = ctx.get_pref().await?;
    let code = pref.language_or(default_language);
    log::info!("Loading language table: {code}");
    ctx.get_lang(code).await
}
