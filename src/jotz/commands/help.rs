use crate::commands::{CmdResult, HelpRow};
use crate::dispatch::CommandSpec;
use crate::error::Result;

/// Renders the registry as help rows, plus the exit aliases the
/// dispatcher handles outside the registry.
pub fn run(registry: &[CommandSpec]) -> Result<CmdResult> {
    let mut rows: Vec<HelpRow> = registry
        .iter()
        .map(|spec| HelpRow {
            command: spec.name.to_string(),
            description: spec.description.to_string(),
        })
        .collect();
    rows.push(HelpRow {
        command: "0 or exit".to_string(),
        description: "save and exit".to_string(),
    });

    Ok(CmdResult::default().with_help_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::REGISTRY;

    #[test]
    fn lists_every_registered_command_plus_exit() {
        let result = run(REGISTRY).unwrap();
        assert_eq!(result.help_rows.len(), REGISTRY.len() + 1);
        assert!(result.help_rows.iter().any(|r| r.command == "show all"));
        assert_eq!(result.help_rows.last().unwrap().command, "0 or exit");
    }
}
