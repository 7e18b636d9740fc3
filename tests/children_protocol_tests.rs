//! Children slot protocol tests

use std::io::Write;
use std::sync::Arc;
use std::thread;

use templet::{from_fn, initialize, pop_children, push_children, Context, Template};

fn text(s: &'static str) -> Arc<dyn Template> {
    Arc::new(from_fn(move |_: &Context, w: &mut dyn Write| {
        w.write_all(s.as_bytes())?;
        Ok(())
    }))
}

fn render(t: &dyn Template, ctx: &Context) -> String {
    let mut out = Vec::new();
    t.render(ctx, &mut out).expect("render failed");
    String::from_utf8(out).expect("utf-8")
}

#[test]
fn test_initialize_is_idempotent() {
    let ctx = initialize(&Context::background());
    push_children(&ctx, text("original"));

    // Re-initializing must not replace the in-flight cell
    let again = initialize(&ctx);
    assert_eq!(again.depth(), ctx.depth());

    let (_, children) = pop_children(&again);
    assert_eq!(render(children.as_ref(), &again), "original");
}

#[test]
fn test_children_are_consumed_once() {
    let ctx = initialize(&Context::background());
    push_children(&ctx, text("T"));

    let (ctx, first) = pop_children(&ctx);
    assert_eq!(render(first.as_ref(), &ctx), "T");

    // Second pop without a push yields the no-op template
    let (ctx, second) = pop_children(&ctx);
    assert_eq!(render(second.as_ref(), &ctx), "");
}

#[test]
fn test_pop_on_fresh_context_is_noop() {
    let ctx = initialize(&Context::background());
    let (_, children) = pop_children(&ctx);
    assert_eq!(render(children.as_ref(), &ctx), "");
}

#[test]
fn test_initialize_keeps_existing_values() {
    let ctx = Context::background().with_value(String::from("request-1"));
    let ctx = initialize(&ctx);
    assert_eq!(ctx.value::<String>().map(String::as_str), Some("request-1"));
}

#[test]
#[should_panic(expected = "not initialized")]
fn test_push_without_initialize_panics() {
    push_children(&Context::background(), text("lost"));
}

#[test]
fn test_independent_contexts_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let ctx = initialize(&Context::background());
                for _ in 0..100 {
                    let label: &'static str = if i % 2 == 0 { "even" } else { "odd" };
                    push_children(&ctx, text(label));
                    let (ctx, children) = pop_children(&ctx);
                    assert_eq!(render(children.as_ref(), &ctx), label);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("thread panicked");
    }
}
