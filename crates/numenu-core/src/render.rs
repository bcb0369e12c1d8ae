//! Text layout of a menu.

use std::fmt;
use std::io::Write;

use crate::menu::Menu;

impl Menu {
    /// Render the menu as text.
    ///
    /// Layout: the title underlined with dashes (omitted when the title is
    /// empty), one `"{n}. {label}"` line per option, then the exit line when
    /// exiting is allowed. With `show_completion`, each option line gets
    /// `" - "` and the chosen or unchosen label appended.
    pub fn render(&self, show_completion: bool) -> String {
        let mut out = String::from(self.title());

        if !self.title().is_empty() {
            out.push('\n');
            out.push_str(&"-".repeat(self.title().chars().count()));
            out.push('\n');
        }

        for (i, option) in self.options().iter().enumerate() {
            out.push_str(&format!("{}. {}", i + 1, option));
            if show_completion {
                let label = match self.is_chosen_at(i) {
                    Some(true) => self.chosen_text(),
                    _ => self.unchosen_text(),
                };
                out.push_str(" - ");
                out.push_str(label.unwrap_or_default());
            }
            out.push('\n');
        }

        if self.is_exit_allowed() {
            out.push_str(&format!(
                "{}. {}\n",
                self.exit_on(),
                self.exit_text().unwrap_or_default()
            ));
        }

        out
    }

    /// Write the rendered menu followed by a blank line.
    pub fn display<W: Write>(&self, out: &mut W, show_completion: bool) -> std::io::Result<()> {
        writeln!(out, "{}", self.render(show_completion))?;
        out.flush()
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

#[cfg(test)]
mod tests {
    use crate::menu::{Menu, MenuParts};
    use proptest::prelude::*;

    #[test]
    fn test_untitled_menu_with_exit() {
        let menu = Menu::with_exit("", ["A", "B", "C"], 0, "Quit").unwrap();

        let text = menu.render(false);
        assert_eq!(text, "1. A\n2. B\n3. C\n0. Quit\n");
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            ["1. A", "2. B", "3. C", "0. Quit"]
        );
    }

    #[test]
    fn test_title_is_underlined() {
        let menu = Menu::new("Settings", ["Sound", "Video"]).unwrap();

        assert_eq!(menu.render(false), "Settings\n--------\n1. Sound\n2. Video\n");
    }

    #[test]
    fn test_underline_counts_characters_not_bytes() {
        let menu = Menu::new("Café", ["Espresso"]).unwrap();

        assert!(menu.render(false).starts_with("Café\n----\n"));
    }

    #[test]
    fn test_completion_labels() {
        let mut menu = Menu::with_tracking("", ["One", "Two"], "Done!", "Not yet!").unwrap();
        menu.set_chosen_at(1, true).unwrap();

        assert_eq!(menu.render(true), "1. One - Not yet!\n2. Two - Done!\n");
        assert_eq!(menu.render(false), "1. One\n2. Two\n");
    }

    #[test]
    fn test_unset_labels_render_empty() {
        let menu = Menu::with_exit("", ["A"], -1, "Back").unwrap();

        assert_eq!(menu.render(true), "1. A - \n-1. Back\n");
    }

    #[test]
    fn test_exit_hidden_when_not_allowed() {
        let menu = Menu::from_parts(MenuParts {
            options: vec!["Finish all".to_string(), "To exit".to_string()],
            exit_on: 0,
            exit_text: Some("This should not show up in the menu".to_string()),
            ..MenuParts::default()
        })
        .unwrap();

        assert!(!menu.render(false).contains("should not show up"));
    }

    #[test]
    fn test_display_trait_and_writer() {
        let menu = Menu::with_exit("Hi", ["A"], 0, "Bye").unwrap();
        assert_eq!(menu.to_string(), menu.render(false));

        let mut buf = Vec::new();
        menu.display(&mut buf, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hi\n--\n1. A\n0. Bye\n\n");
    }

    proptest! {
        #[test]
        fn prop_line_count(
            n in 0usize..10,
            title in "[a-zA-Z ]{0,12}",
            exit_allowed in any::<bool>(),
            show_completion in any::<bool>(),
        ) {
            let mut menu = Menu::blank();
            menu.set_title(title.clone())
                .set_options((1..=n).map(|i| format!("Option {i}")))
                .sync_num_options()
                .init_chosen()
                .set_exit_allowed(exit_allowed)
                .set_exit_on(-1)
                .set_exit_text("Exit");

            let expected = n
                + usize::from(exit_allowed)
                + if title.is_empty() { 0 } else { 2 };
            prop_assert_eq!(menu.render(show_completion).lines().count(), expected);
        }
    }
}
