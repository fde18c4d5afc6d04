use crate::cli::SubmitCommands;
use crate::services::{audit, report, results, settings};

pub fn handle_submit(command: &SubmitCommands) -> anyhow::Result<()> {
    match command {
        SubmitCommands::Results { file } => {
            let reports = results::load_reports(file)?;
            let settings = settings::load_settings()?;
            let posture = report::assemble(
                reports,
                &settings.account.customer_guid,
                &settings.account.cluster_name,
            );
            audit::audit(
                "submit-results",
                serde_json::json!({
                    "frameworks": posture.framework_reports.len(),
                    "reportID": posture.report_id,
                }),
            );
            println!("{}", serde_json::to_string_pretty(&posture)?);
            Ok(())
        }
    }
}
