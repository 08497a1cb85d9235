use sweep::domain::ports::RepositoryError;
use sweep::SweepError;

/// Human form of a command failure, with a fix hint where one exists
pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {:#}\n", err);
    if let Some(hint) = fix_hint(err) {
        out.push_str(&format!("  → Fix: {}\n", hint));
    }
    out
}

fn fix_hint(err: &anyhow::Error) -> Option<&'static str> {
    let repository = err.chain().find_map(|cause| {
        cause
            .downcast_ref::<RepositoryError>()
            .or_else(|| match cause.downcast_ref::<SweepError>() {
                Some(SweepError::Repository(inner)) => Some(inner),
                _ => None,
            })
    });
    match repository {
        Some(RepositoryError::VersionMismatch { .. }) => {
            Some("upgrade sweep or recreate the snapshot with `sweep init --force`")
        }
        // Corrupted already carries its own fix line
        _ => match err.downcast_ref::<SweepError>() {
            Some(SweepError::NotFound { .. }) => Some("run `sweep summary` to list known ids"),
            Some(SweepError::InvalidConfig { .. }) => Some("correct the TOML and try again"),
            _ => None,
        },
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", output);
        return;
    }

    eprint!("{}", format_error(err));
}
