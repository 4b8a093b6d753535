//! Console output formatter for tool listings

use colored::Colorize;
use orchestra_domain::ToolDescriptor;
use serde_json::{Value, json};

/// Formats tool descriptors for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-readable listing: one block per tool with its arguments.
    pub fn format_tool_list(tools: &[ToolDescriptor]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Elicitation Tools"));

        for tool in tools {
            output.push_str(&format!(
                "\n{}\n  {}\n",
                tool.name.cyan().bold(),
                tool.description
            ));

            let required: Vec<&str> = tool.input_schema["required"]
                .as_array()
                .map(|r| r.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();

            if let Some(properties) = tool.input_schema["properties"].as_object() {
                for (name, property) in properties {
                    output.push_str(&Self::argument_line(
                        name,
                        property,
                        required.contains(&name.as_str()),
                    ));
                }
            }
        }

        output
    }

    /// The `tools/list` result as pretty JSON.
    pub fn format_tool_list_json(tools: &[ToolDescriptor]) -> String {
        serde_json::to_string_pretty(&json!({ "tools": tools }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn argument_line(name: &str, property: &Value, required: bool) -> String {
        let marker = if required {
            "required".yellow().to_string()
        } else {
            "optional".dimmed().to_string()
        };

        match property["enum"].as_array() {
            Some(values) => {
                let values: Vec<&str> = values.iter().filter_map(Value::as_str).collect();
                format!("    {:<16} {}  {}\n", name, marker, values.join(" | ").green())
            }
            None => format!("    {:<16} {}\n", name, marker),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }
}
