// elsewhen/core/examples/branch_basic.rs

use elsewhen::{branch, lazy};
use tracing::info;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Branch Expression Example ---");

  let decide = |load: u32| {
    branch()
      .if_(load > 90, "shed traffic")
      .elseif(load > 70, "scale out")
      .elseif_cond(load > 40)
      .then("watch closely")
      .else_("steady state")
  };

  for load in [95u32, 80, 50, 10] {
    info!(load, decision = decide(load), "capacity decision");
  }

  // Values can be deferred; only the selected one is produced.
  let report: String = branch()
    .if_(false, lazy(|| expensive_summary("full")))
    .elseif(true, lazy(|| expensive_summary("short")))
    .else_(lazy(|| expensive_summary("empty")));
  info!(%report, "generated exactly one summary");
}

fn expensive_summary(kind: &str) -> String {
  info!(kind, "building summary");
  format!("{} summary", kind)
}
