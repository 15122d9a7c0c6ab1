#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "drift_capabilities",
        summary: "Navigation guide: decision tree, surgical lookups, common mistakes, layers.",
    },
    ToolDescriptor {
        name: "drift_route",
        summary: "Classify a task description and return the ordered tool sequence.",
    },
    ToolDescriptor {
        name: "drift_sequence",
        summary: "Tool sequence for a known category tag.",
    },
    ToolDescriptor {
        name: "drift_lookup",
        summary: "One surgical tool (plus example args) for a single-fact question.",
    },
];

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Drift Navigator tells agents which drift tools to call for a task.".to_string(),
        "Recommended flow: drift_capabilities once → drift_route per task; use drift_lookup for single-fact questions."
            .to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_list_every_tool() {
        let text = tool_instructions();
        for tool in TOOL_CATALOG {
            assert!(text.contains(tool.name), "{} missing", tool.name);
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<_> = TOOL_CATALOG.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TOOL_CATALOG.len());
    }
}
