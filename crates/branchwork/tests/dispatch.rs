//! End-to-end dispatch behavior across all modes.

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use branchwork::helpers::{has_length, is_empty};
use branchwork::{
    Branch, Case, Child, Conditional, ConditionalError, Mode, Node, Presentation, RenderReport,
    Wrapper,
};
use insta::{assert_json_snapshot, assert_snapshot};

fn text(s: &str) -> Node {
    Node::text(s)
}

fn li(n: &i32) -> Node {
    Node::element("li").with_child(Node::text(n.to_string()))
}

// ============================================================================
// Primary condition
// ============================================================================

#[test]
fn primary_condition_overrides_directives() {
    for when in [true, false] {
        let c = Conditional::<()>::new()
            .when(when)
            .gt(1, 100)
            .eq("a", "a")
            .contains("abc", "zzz")
            .child("on")
            .fallback("off");
        let expected = if when { "on" } else { "off" };
        assert_eq!(c.render().unwrap().to_string(), expected);
    }
}

#[test]
fn helper_conditions_drive_dispatch() {
    let items: Vec<i32> = Vec::new();
    let c = Conditional::<()>::new()
        .condition(is_empty(&items))
        .child("nothing yet");
    assert_eq!(c.render().unwrap().to_string(), "nothing yet");

    let c = Conditional::<()>::new()
        .condition(has_length(&[1, 2, 3], 2))
        .child("pair")
        .fallback("not a pair");
    assert_eq!(c.render().unwrap().to_string(), "not a pair");
}

// ============================================================================
// Switch
// ============================================================================

fn switch_on(value: i32, with_default: bool) -> Conditional<()> {
    let second = if with_default {
        Case::when(2).as_default()
    } else {
        Case::when(2)
    };
    Conditional::new()
        .switch(value)
        .child(Child::case(1, vec![text("one")]))
        .child(second.child("two"))
        .fallback("fallback")
}

#[test]
fn switch_selects_first_matching_case() {
    assert_eq!(switch_on(1, true).render().unwrap().to_string(), "one");
    assert_eq!(switch_on(2, true).render().unwrap().to_string(), "two");
}

#[test]
fn switch_falls_back_to_default_case() {
    assert_eq!(switch_on(3, true).render().unwrap().to_string(), "two");
}

#[test]
fn switch_without_default_uses_fallback() {
    assert_eq!(switch_on(3, false).render().unwrap(), text("fallback"));
}

#[test]
fn switch_without_fallback_renders_nothing() {
    let c = Conditional::<()>::new()
        .switch("x")
        .child(Child::case("y", vec![text("y")]));
    assert_eq!(c.render().unwrap(), Node::Empty);
}

#[test]
fn switch_ignores_plain_children() {
    let c = Conditional::<()>::new()
        .switch(true)
        .child("noise")
        .child(Child::case(true, vec![text("yes")]))
        .wrapper("span");
    assert_eq!(c.render().unwrap().to_string(), "<span>yes</span>");
}

// ============================================================================
// If-chain
// ============================================================================

#[test]
fn if_chain_picks_first_true_entry() {
    let c = Conditional::<()>::new()
        .if_(false, "never")
        .else_if(true, "A")
        .else_("B");
    assert_eq!(c.render().unwrap().to_string(), "A");
}

#[test]
fn if_chain_else_when_nothing_matches() {
    let c = Conditional::<()>::new()
        .if_(false, "never")
        .else_if(false, "A")
        .else_("B");
    assert_eq!(c.render().unwrap().to_string(), "B");
}

#[test]
fn if_chain_entries_ignore_directives() {
    let c = Conditional::<()>::new()
        .gt(2, 1)
        .starts_with("draft-7", "draft")
        .if_(false, "A")
        .else_("B");
    assert_eq!(c.render().unwrap().to_string(), "B");

    let c = Conditional::<()>::new()
        .lt(2, 1)
        .if_(false, "never")
        .else_if(true, "A");
    assert_eq!(c.render().unwrap().to_string(), "A");
}

#[test]
fn if_chain_branch_wrapper() {
    let c = Conditional::<()>::new().if_(
        true,
        Branch::new().child("a").child(Node::element("br")).wrapper("p"),
    );
    assert_eq!(c.render().unwrap().to_string(), "<p>a<br></br></p>");
}

// ============================================================================
// Iteration
// ============================================================================

#[test]
fn iteration_sorts_and_limits() {
    let c = Conditional::new()
        .each(vec![3, 1, 2])
        .sort(|a: &i32, b: &i32| a.cmp(b))
        .limit(2)
        .render_item(|n, _, _| text(&n.to_string()));
    let node = c.render().unwrap();
    assert_eq!(node.to_string(), "12");
    assert_eq!(node.keys(), vec!["0", "1"]);
}

#[test]
fn iteration_empty_source() {
    let base = || {
        Conditional::new()
            .each(Vec::<i32>::new())
            .render_item(|n, _, _| li(n))
    };

    assert_eq!(base().render().unwrap(), Node::Empty);
    assert_eq!(base().fallback("fb").render().unwrap(), text("fb"));
    assert_eq!(
        base().fallback("fb").empty("no items").render().unwrap(),
        text("no items")
    );
}

#[test]
fn iteration_markup_snapshot() {
    let c = Conditional::new()
        .each(vec![5, 3, 8, 1])
        .filter(|n: &i32| *n != 8)
        .sort(|a: &i32, b: &i32| a.cmp(b))
        .reverse(true)
        .render_item(|n, _, _| li(n))
        .presentation(Presentation {
            wrapper: Wrapper::element("ul"),
            animate: true,
            debug: false,
        });
    assert_snapshot!(
        c.render().unwrap().to_string(),
        @r#"<ul class="conditional-animated"><li>5</li><li>3</li><li>1</li></ul>"#
    );
}

#[test]
fn loading_placeholder_json_snapshot() {
    let c = Conditional::<()>::new().loading(true);
    assert_json_snapshot!(c.render().unwrap(), @r#"
    {
      "element": {
        "tag": "div",
        "class": "conditional-loading",
        "children": [
          {
            "text": "Loading..."
          }
        ]
      }
    }
    "#);
}

#[test]
fn render_is_repeatable() {
    let c = Conditional::new()
        .each(vec![2, 1])
        .sort(|a: &i32, b: &i32| a.cmp(b))
        .render_item(|n, _, _| li(n));
    assert_eq!(c.render().unwrap(), c.render().unwrap());
}

// ============================================================================
// Loading and error precedence
// ============================================================================

#[test]
fn loading_beats_switch_and_if_chain() {
    let switch = Conditional::<()>::new()
        .loading(true)
        .switch(1)
        .child(Child::case(1, vec![text("one")]));
    assert_eq!(switch.mode(), Mode::Loading);
    assert_eq!(switch.render().unwrap().text_content(), "Loading...");

    let chain = Conditional::<()>::new()
        .loading(true)
        .error("boom")
        .if_(true, "A");
    assert_eq!(chain.render().unwrap().text_content(), "Loading...");
}

#[test]
fn error_beats_iteration() {
    let c = Conditional::new()
        .each(vec![1, 2])
        .render_item(|n, _, _| li(n))
        .error("fetch failed");
    assert_snapshot!(
        c.render().unwrap().to_string(),
        @r#"<div class="conditional-error">Error: fetch failed</div>"#
    );
}

// ============================================================================
// Errors and observer
// ============================================================================

#[test]
fn duplicate_keys_fail_dispatch() {
    let c = Conditional::new()
        .each(vec!["a", "b", "a"])
        .key(|s, _| s.to_string())
        .render_item(|s, _, _| text(s));
    let err = c.render().unwrap_err();
    assert_eq!(err.to_string(), "duplicate item key 'a' at index 2");
}

#[test]
fn static_children_with_condition_and_iteration_fail() {
    let c = Conditional::new().each(vec![1]).lt(0, 1).child("static");
    assert!(matches!(
        c.render(),
        Err(ConditionalError::RenderFnRequired)
    ));
}

#[test]
fn observer_called_once_per_dispatch_in_every_mode() {
    let calls = Rc::new(Cell::new(0));
    let last = Rc::new(Cell::new(None));

    let counter = Rc::clone(&calls);
    let seen = Rc::clone(&last);
    let c = Conditional::new()
        .loading(true)
        .each(vec![1, 2, 3])
        .limit(2)
        .on_render(move |report: &RenderReport| {
            counter.set(counter.get() + 1);
            seen.set(Some(*report));
        });

    c.render().unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(
        last.get(),
        Some(RenderReport {
            condition: true,
            item_count: 2,
            has_condition: false,
            has_iteration: true,
        })
    );
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn debug_subscriber(buffer: &LogBuffer) -> impl tracing::Subscriber + Send + Sync {
    let buffer = buffer.clone();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("branchwork=debug"))
        .with_ansi(false)
        .with_writer(move || buffer.clone())
        .finish()
}

#[test]
fn debug_flag_emits_pipeline_event() {
    let buffer = LogBuffer::default();
    let c = Conditional::new()
        .each(vec![3, 2, 1])
        .filter(|n: &i32| *n > 1)
        .render_item(|n, _, _| li(n));

    tracing::subscriber::with_default(debug_subscriber(&buffer), || {
        c.render().unwrap();
    });
    assert!(!buffer.contents().contains("collection pipeline"));

    let c = c.debug(true);
    tracing::subscriber::with_default(debug_subscriber(&buffer), || {
        c.render().unwrap();
    });
    let logs = buffer.contents();
    assert_eq!(logs.matches("collection pipeline").count(), 1);
    assert!(logs.contains("original=3"));
    assert!(logs.contains("processed=2"));
}

#[test]
fn debug_logging_keeps_output() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("branchwork=debug"))
        .with_test_writer()
        .try_init();

    let quiet = Conditional::new()
        .each(vec![3, 2, 1])
        .reverse(true)
        .render_item(|n, _, _| li(n));
    let loud = Conditional::new()
        .each(vec![3, 2, 1])
        .reverse(true)
        .render_item(|n, _, _| li(n))
        .debug(true);
    assert_eq!(quiet.render().unwrap(), loud.render().unwrap());
}
