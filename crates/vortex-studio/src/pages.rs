use vortex_ui::prelude::*;

/// Application root: the Material shell around the home page. Its own state
/// only carries the theme choice, so toggling it re-renders everything.
pub struct App {
    pub home: WidgetId,
}

impl Widget for App {
    fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
        let swatch = if cx.state().get_bool("dark").unwrap_or(false) {
            "Colors.deepPurple"
        } else {
            "Colors.blue"
        };
        material_app(
            cx,
            props! {
                "title" => "Flutter Demo",
                "theme" => props! { "primarySwatch" => swatch },
                "home" => self.home,
            },
            Children::none(),
        )
    }
}

/// Counter page with a name field. Its actions are local, so pressing the
/// FAB re-renders this page only.
pub struct HomePage {
    pub title: String,
}

impl Widget for HomePage {
    fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
        let count = cx.state().get_num("counter").unwrap_or(0.0);
        let name = cx.state().get_str("name").unwrap_or_default().to_owned();

        let theme_icon = icon(cx, props! { "icon" => "palette" });
        let theme = elevated_button(cx, props! { "dataAction" => "toggleTheme", "id" => "theme" }, children![theme_icon]);
        let bar = app_bar(cx, props! { "title" => self.title.as_str() }, children![theme]);

        let who = if name.is_empty() { "World" } else { name.as_str() };
        let greeting = text(
            cx,
            format!("Hello, {who}!"),
            props! { "style" => props! { "fontSize" => "24px", "fontWeight" => "bold" } },
        );
        let gap = sized_box(cx, props! { "height" => 20 });
        let field = cx.create_element(
            "input",
            &props! { "id" => "name", "placeholder" => "Your name", "value" => name.as_str(), "dataState" => "name" },
            &Children::none(),
        );
        let pushed = text(cx, "You have pushed the button this many times:", Props::new());
        let counter = text(cx, format!("{count}"), props! { "id" => "counter", "className" => "headline" });
        let reset_label = text(cx, "Reset", Props::new());
        let reset = elevated_button(cx, props! { "dataAction" => "resetCounter", "id" => "reset" }, children![reset_label]);

        let content = column(
            cx,
            props! {
                "mainAxisAlignment" => "center",
                "children" => vec![greeting, gap, field, pushed, counter, reset],
            },
            Children::none(),
        );
        let body = center(cx, props! { "child" => content }, Children::none());

        let plus = icon(cx, Props::new());
        let fab = floating_action_button(cx, props! { "dataAction" => "incrementCounter", "id" => "fab" }, children![plus]);

        scaffold(cx, props! { "appBar" => bar, "body" => body, "floatingActionButton" => fab }, Children::none())
    }

    fn actions(&self) -> ActionRegistry {
        ActionRegistry::new()
            .with("incrementCounter", |cx, _| {
                let count = cx.state().get_num("counter").unwrap_or(0.0);
                cx.set_state([("counter", count + 1.0)]);
            })
            .with("resetCounter", |cx, _| cx.set_state([("counter", 0)]))
    }
}
