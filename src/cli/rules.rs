//! Show the built-in rules.

use crate::guard::post_edit::{
    DECLARATION_MARKER, FOCUS_MARKERS, INTERACTIVITY_MARKERS, SOURCE_SUFFIX,
};
use crate::guard::pre_edit::PATH_RULES;

/// Run rules command.
pub fn run() {
    print!("{}", render());
}

/// Render the rule catalog as plain text.
pub fn render() -> String {
    let mut out = String::from("pre-edit path rules:\n");
    for rule in PATH_RULES {
        let headline = rule.message.lines().next().unwrap_or_default();
        out.push_str(&format!("  {:<22} {}\n", rule.name, headline));
    }

    out.push_str("\npost-edit focus check:\n");
    out.push_str(&format!("  files:         *{}\n", SOURCE_SUFFIX));
    out.push_str(&format!("  declaration:   {}\n", DECLARATION_MARKER));
    out.push_str(&format!(
        "  interactivity: {}\n",
        INTERACTIVITY_MARKERS.join(", ")
    ));
    out.push_str(&format!("  focus:         {}\n", FOCUS_MARKERS.join(", ")));
    out
}
