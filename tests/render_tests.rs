//! End-to-end render tests: pooled passes, children, and error propagation

use std::io::Write;
use std::sync::Arc;
use std::thread;

use templet::{
    from_fn, initialize, push_children, Children, Context, Error, Fragment, Raw, Renderer,
    RuntimeConfig, Template, Text, WithChildren,
};

fn failing(msg: &'static str) -> impl Template {
    from_fn(move |_: &Context, _: &mut dyn Write| Err(Error::Render(msg.into())))
}

#[test]
fn test_error_propagates_unchanged() {
    let renderer = Renderer::default();
    let page = Fragment::new()
        .push(Raw::new("<p>"))
        .push(failing("E"))
        .push(Raw::new("</p>"));

    let err = renderer
        .render(&Context::background(), &page, &mut Vec::new())
        .unwrap_err();
    assert!(matches!(err, Error::Render(ref m) if m == "E"));
}

#[test]
fn test_children_error_propagates_through_layout() {
    let layout = Fragment::new().push(Raw::new("<div>")).push(Children);
    let page = WithChildren::new(layout, failing("child broke"));

    let err = Renderer::default()
        .render_to_string(&Context::background(), &page)
        .unwrap_err();
    assert!(matches!(err, Error::Render(ref m) if m == "child broke"));
}

#[test]
fn test_caller_pushed_children_reach_template() {
    let renderer = Renderer::default();
    let ctx = initialize(&Context::background());
    push_children(&ctx, Arc::new(Text::new("<kids>")));

    let layout = Fragment::new()
        .push(Raw::new("<ul>"))
        .push(Children)
        .push(Raw::new("</ul>"));
    let html = renderer.render_to_string(&ctx, &layout).unwrap();
    assert_eq!(html, "<ul>&lt;kids&gt;</ul>");

    // Consumed: a second pass renders no children
    let html = renderer.render_to_string(&ctx, &layout).unwrap();
    assert_eq!(html, "<ul></ul>");
}

#[test]
fn test_template_sees_context_values() {
    struct User(&'static str);

    let greeting = from_fn(|ctx: &Context, w: &mut dyn Write| {
        let name = ctx.value::<User>().map_or("guest", |u| u.0);
        write!(w, "hello {name}")?;
        Ok(())
    });

    let renderer = Renderer::default();
    let ctx = Context::background().with_value(User("ada"));
    assert_eq!(renderer.render_to_string(&ctx, &greeting).unwrap(), "hello ada");
    assert_eq!(
        renderer
            .render_to_string(&Context::background(), &greeting)
            .unwrap(),
        "hello guest"
    );
}

#[test]
fn test_cancellation_is_passed_through() {
    let stop_early = from_fn(|ctx: &Context, w: &mut dyn Write| {
        if ctx.is_cancelled() {
            return Ok(());
        }
        w.write_all(b"full page")?;
        Ok(())
    });

    let renderer = Renderer::default();
    let (ctx, cancel) = Context::background().with_cancel();
    assert_eq!(renderer.render_to_string(&ctx, &stop_early).unwrap(), "full page");
    cancel.cancel();
    assert_eq!(renderer.render_to_string(&ctx, &stop_early).unwrap(), "");
}

#[test]
fn test_concurrent_renders_share_pool() {
    let renderer = Renderer::from_config(&RuntimeConfig::default());
    let handles: Vec<_> = (0..6)
        .map(|i| {
            let renderer = renderer.clone();
            thread::spawn(move || {
                for j in 0..50 {
                    let layout = Fragment::new()
                        .push(Raw::new("<section>"))
                        .push(Children)
                        .push(Raw::new("</section>"));
                    let page = WithChildren::new(layout, Text::new(format!("{i}-{j}")));
                    let html = renderer
                        .render_to_string(&Context::background(), &page)
                        .unwrap();
                    assert_eq!(html, format!("<section>{i}-{j}</section>"));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("render thread panicked");
    }

    let stats = renderer.pool().stats();
    assert_eq!(stats.outstanding, 0);
    assert_eq!(stats.allocated + stats.recycled, 300);
}

fn card() -> Fragment {
    Fragment::new()
        .push(Raw::new("<card>"))
        .push(Children)
        .push(Raw::new("</card>"))
}

#[test]
fn test_nested_component_before_slot() {
    let body = Fragment::new()
        .push(WithChildren::new(card(), Text::new("inner")))
        .push(Raw::new("|"))
        .push(Children);
    let page = WithChildren::new(body, Text::new("outer"));

    let html = Renderer::default()
        .render_to_string(&Context::background(), &page)
        .unwrap();
    assert_eq!(html, "<card>inner</card>|outer");
}

#[test]
fn test_unconsumed_children_stay_with_their_parent() {
    let page = Fragment::new()
        .push(WithChildren::new(Raw::new("<hr>"), Text::new("LEAK")))
        .push(card());

    let html = Renderer::default()
        .render_to_string(&Context::background(), &page)
        .unwrap();
    assert_eq!(html, "<hr><card></card>");
}

#[test]
fn test_layout_renders_children_on_every_pass() {
    let renderer = Renderer::default();
    let ctx = initialize(&Context::background());
    let page = WithChildren::new(card(), Text::new("body"));

    for _ in 0..3 {
        assert_eq!(
            renderer.render_to_string(&ctx, &page).unwrap(),
            "<card>body</card>"
        );
    }
}
