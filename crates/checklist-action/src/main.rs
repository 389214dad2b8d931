use std::process::ExitCode;

use tracing::error;

use checklist_action::{app, ActionContext, ActionError, ActionInputs};
use checklist_core::errors::ChecklistErrorCode;
use checklist_core::tracing::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match try_main().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e.coded_string(), "checklist aborted");
            print!("{}", app::fatal_annotation(&e));
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<bool, ActionError> {
    let inputs = ActionInputs::from_env();
    let context = ActionContext::from_env()?;
    let report = app::run(&inputs, &context).await?;
    app::publish(&report, &context, inputs.report_format())?;
    Ok(report.passed())
}
