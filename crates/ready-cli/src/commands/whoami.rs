use ready_config::BackendKind;
use ready_core::enums::UserRole;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WhoamiResponse<'a> {
    user_id: Option<&'a str>,
    email: Option<&'a str>,
    role: UserRole,
    backend: BackendKind,
}

/// Handle `rdy whoami`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.service.actor();
    let response = WhoamiResponse {
        user_id: actor.user_id.as_deref(),
        email: actor.email.as_deref(),
        role: actor.role,
        backend: ctx.service.backend().kind(),
    };
    output(&response, flags.format)
}
