use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::orgchart::OrganizationChartNode;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Print an organization chart: the JSON envelope, or an indented outline
pub fn output_chart(output_format: &OutputFormat, chart: &OrganizationChartNode) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "success": true, "data": chart }))?
            );
        }
        OutputFormat::Text => {
            print!("{}", render_outline(chart));
        }
    }
    Ok(())
}

/// One line per node, two spaces of indent per level below the root
pub fn render_outline(chart: &OrganizationChartNode) -> String {
    let mut out = String::new();
    let mut stack = vec![(chart, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{} - {} ({})", node.full_name, node.title, node.team_name));
        if node.cycle_truncated {
            out.push_str(" [cycle]");
        }
        if node.depth_truncated {
            out.push_str(" [...]");
        }
        out.push('\n');
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultRootConfig;
    use crate::orgchart::{build_organization_chart, OrgTreeBuilder};
    use crate::testing::employee;

    #[test]
    fn renders_indented_outline() {
        let employees = vec![
            employee("1", "ceo", "Jane", "Doe", None),
            employee("2", "team_lead", "Tia", "Lund", Some("1")),
            employee("3", "developer", "Sam", "Lee", Some("2")),
        ];
        let chart = build_organization_chart(&employees, &DefaultRootConfig::default());

        assert_eq!(
            render_outline(&chart),
            "Jane Doe - Chief Executive Officer (Engineering)\n  \
             Tia Lund - Team Lead (Engineering)\n    \
             Sam Lee - Developer (Engineering)\n"
        );
    }

    #[test]
    fn marks_truncated_branches() {
        let employees = vec![
            employee("1", "ceo", "Jane", "Doe", None),
            employee("2", "team_lead", "Tia", "Lund", Some("1")),
            employee("3", "developer", "Sam", "Lee", Some("2")),
            employee("4", "developer", "Oz", "Orr", Some("3")),
            employee("s", "consultant", "Solo", "Self", Some("s")),
        ];
        let chart = OrgTreeBuilder::new(&employees, &DefaultRootConfig::default())
            .max_depth(2)
            .build();

        assert_eq!(
            render_outline(&chart),
            "Jane Doe - Chief Executive Officer (Engineering)\n  \
             Tia Lund - Team Lead (Engineering)\n    \
             Sam Lee - Developer (Engineering) [...]\n  \
             Solo Self - Consultant (Engineering)\n    \
             Solo Self - Consultant (Engineering) [cycle]\n"
        );
    }
}
