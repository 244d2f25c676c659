//! Tests for `#[derive(Fielded)]` and the field-based helpers.

use branchwork::helpers::{filter_by, sort_by, unique_by_field};
use branchwork::Number;
use branchwork::{Conditional, Dir, Fielded, Node, Value};

#[derive(Debug, Clone, Fielded)]
struct Task {
    #[field(String)]
    name: String,

    #[field(Number)]
    priority: u8,

    #[field(Bool)]
    done: bool,

    #[field(String, rename = "team")]
    owner: &'static str,

    #[field(skip)]
    #[allow(dead_code)]
    internal_id: u64,

    #[allow(dead_code)]
    notes: String,
}

fn task(name: &str, priority: u8, done: bool, owner: &'static str) -> Task {
    Task {
        name: name.to_string(),
        priority,
        done,
        owner,
        internal_id: 0,
        notes: String::new(),
    }
}

fn tasks() -> Vec<Task> {
    vec![
        task("docs", 2, false, "web"),
        task("release", 5, false, "core"),
        task("triage", 1, true, "web"),
        task("bench", 5, true, "core"),
    ]
}

#[test]
fn derive_generates_constants() {
    assert_eq!(Task::NAME, "name");
    assert_eq!(Task::PRIORITY, "priority");
    assert_eq!(Task::DONE, "done");
    assert_eq!(Task::TEAM, "team");
}

#[test]
fn derive_reads_fields() {
    let t = task("docs", 2, false, "web");
    assert_eq!(t.field_value(Task::NAME), Value::from("docs"));
    assert_eq!(t.field_value(Task::PRIORITY), Value::from(2));
    assert_eq!(t.field_value(Task::DONE), Value::Bool(false));
    assert_eq!(t.field_value("team"), Value::from("web"));
}

#[test]
fn skipped_renamed_and_untagged_fields_are_null() {
    let t = task("docs", 2, false, "web");
    assert!(t.field_value("internal_id").is_null());
    assert!(t.field_value("notes").is_null());
    assert!(t.field_value("owner").is_null());
}

#[test]
fn sort_filter_and_unique_by_field() {
    let c = Conditional::new()
        .each(tasks())
        .filter(filter_by::<Task>(Task::DONE, false))
        .sort(sort_by::<Task>(Task::PRIORITY, Dir::Desc))
        .render_item(|t, _, _| Node::text(format!("{};", t.name)));
    assert_eq!(c.render().unwrap().to_string(), "release;docs;");

    let all = tasks();
    let per_team: Vec<&str> = unique_by_field(&all, Task::TEAM)
        .into_iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(per_team, vec!["docs", "release"]);
}

#[test]
fn equal_sort_keys_keep_input_order() {
    let c = Conditional::new()
        .each(tasks())
        .sort(sort_by::<Task>(Task::PRIORITY, Dir::Desc))
        .key(|t, _| t.name.clone())
        .render_item(|t, _, _| Node::text(t.name.clone()));
    assert_eq!(
        c.render().unwrap().keys(),
        vec!["release", "bench", "docs", "triage"]
    );
}

/// A field whose type varies from row to row.
struct Mixed(Value<'static>);

impl Fielded for Mixed {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "v" => self.0.clone(),
            _ => Value::Null,
        }
    }
}

fn mixed(i: usize) -> Mixed {
    Mixed(match i % 4 {
        0 => Value::from(i as i64),
        1 => Value::from("s"),
        2 => Value::Number(Number::F64(f64::NAN)),
        _ => Value::Null,
    })
}

fn kind(v: &Value<'_>) -> &'static str {
    match v {
        Value::Number(Number::F64(f)) if f.is_nan() => "nan",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Bool(_) => "bool",
        Value::Null => "null",
    }
}

#[test]
fn sorting_mixed_field_types_is_total() {
    for dir in [Dir::Asc, Dir::Desc] {
        let c = Conditional::new()
            .each((0..64).map(mixed).collect::<Vec<_>>())
            .sort(sort_by::<Mixed>("v", dir))
            .render_item(|m, _, _| Node::text(format!("{};", kind(&m.0))));
        let out = c.render().unwrap().to_string();

        let mut kinds: Vec<&str> = out.split_terminator(';').collect();
        assert_eq!(kinds.len(), 64);
        kinds.dedup();
        let expected = match dir {
            Dir::Asc => vec!["number", "nan", "string", "null"],
            Dir::Desc => vec!["string", "nan", "number", "null"],
        };
        assert_eq!(kinds, expected);
    }
}
