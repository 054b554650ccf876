use crate::views::View;

fn describe(view: View) -> String {
    let links = view
        .links()
        .iter()
        .map(|link| link.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{:<10} {:<22} -> {links}", view.as_str(), view.title())
}

/// Print the view catalogue.
pub fn execute() {
    for view in View::ALL {
        println!("{}", describe(view));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_links() {
        let line = describe(View::Register);
        assert!(line.starts_with("register"));
        assert!(line.contains("REGISTRO"));
        assert!(line.ends_with("-> welcome, login"));
    }
}
