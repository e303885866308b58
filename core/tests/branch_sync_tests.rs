// tests/branch_sync_tests.rs
mod common;

use common::*;
use elsewhen::{branch, lazy};

#[test]
fn first_true_condition_wins() {
  setup_tracing();
  let result = branch().if_(true, "a").elseif(true, "b").else_("c");
  assert_eq!(result, "a");
}

#[test]
fn later_condition_selects_its_value() {
  setup_tracing();
  let result = branch().if_(false, "a").elseif(true, "b").else_("c");
  assert_eq!(result, "b");
}

#[test]
fn fallback_when_no_condition_matches() {
  setup_tracing();
  let result = branch().if_(false, "a").elseif(false, "b").else_("c");
  assert_eq!(result, "c");
}

#[test]
fn curried_head_and_body_build_the_same_chain() {
  setup_tracing();
  let result = branch()
    .if_cond(false)
    .then("a")
    .elseif_cond(true)
    .then("b")
    .else_("c");
  assert_eq!(result, "b");
}

#[test]
fn lazy_conditions_and_values_resolve_on_demand() {
  setup_tracing();
  let result: &str = branch()
    .if_(lazy(|| 1 + 1 == 3), lazy(|| "wrong math"))
    .elseif(lazy(|| 2 + 2 == 4), lazy(|| "right math"))
    .else_(lazy(|| "no math"));
  assert_eq!(result, "right math");
}

#[test]
fn only_selected_value_producer_runs() {
  setup_tracing();
  let first = counter();
  let second = counter();
  let fallback = counter();

  let result: &str = branch()
    .if_(false, counted(&first, "a"))
    .elseif(true, counted(&second, "b"))
    .else_(counted(&fallback, "c"));

  assert_eq!(result, "b");
  assert_eq!(count_of(&first), 0);
  assert_eq!(count_of(&second), 1);
  assert_eq!(count_of(&fallback), 0);
}

#[test]
fn fallback_producer_runs_only_when_nothing_matches() {
  setup_tracing();
  let fallback = counter();

  let body = branch().if_(false, "a").elseif(false, "b");
  assert_eq!(body.else_(counted(&fallback, "c")), "c");
  assert_eq!(count_of(&fallback), 1);
}

#[test]
fn conditions_after_match_never_run() {
  setup_tracing();
  let first = counter();
  let second = counter();
  let third = counter();

  let result = branch()
    .if_(counted(&first, false), 1)
    .elseif(counted(&second, true), 2)
    .elseif(counted(&third, true), 3)
    .else_(0);

  assert_eq!(result, 2);
  assert_eq!(count_of(&first), 1);
  assert_eq!(count_of(&second), 1);
  assert_eq!(count_of(&third), 0); // short-circuit: never examined
}

#[test]
fn chains_diverge_without_mutating_prefix() {
  setup_tracing();
  let base = branch().if_(false, 1).elseif(false, 2);
  let extended = base.elseif(true, 3);

  assert_eq!(extended.else_(0), 3);
  assert_eq!(base.else_(0), 0); // the 2-entry chain still evaluates as before
  assert_eq!(base.elseif(true, 4).else_(0), 4); // and can diverge again
}

#[test]
fn terminal_call_re_resolves_producers() {
  setup_tracing();
  let hits = counter();
  let body = branch().if_(true, counted(&hits, "x"));

  assert_eq!(body.else_("y"), "x");
  assert_eq!(body.else_("y"), "x");
  assert_eq!(count_of(&hits), 2); // no memoization across terminal calls
}

#[test]
fn long_chain_scans_in_insertion_order() {
  setup_tracing();
  let mut body = branch().if_(false, 0usize);
  for i in 1..=10 {
    body = body.elseif(i == 7, i);
  }
  assert_eq!(body.else_(99), 7);
}

#[test]
fn result_values_pass_through_unchanged() {
  setup_tracing();
  let failing: Result<i32, String> = Err("denied".to_string());
  let result = branch()
    .if_(true, failing.clone())
    .elseif(true, Ok(1))
    .else_(Ok(0));
  assert_eq!(result, failing);
}

#[test]
#[should_panic(expected = "condition blew up")]
fn producer_panic_propagates_from_terminal_call() {
  let body = branch().if_(lazy(|| -> bool { panic!("condition blew up") }), "a");
  body.else_("b");
}

#[test]
fn renders_chain_as_source_text() {
  let body = branch().if_(true, "a").elseif(lazy(|| false), "b");
  assert_eq!(
    body.render(),
    r#"if (true) { "a" } else if (<deferred>) { "b" }"#
  );
}
