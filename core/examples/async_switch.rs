// elsewhen/core/examples/async_switch.rs

use elsewhen::{branch, matcher, pending, pending_with};
use std::time::Duration;
use tracing::info;

async fn healthy(endpoint: &'static str) -> bool {
  // Stand-in for a real probe.
  tokio::time::sleep(Duration::from_millis(10)).await;
  info!(endpoint, "probed");
  endpoint == "eu-west"
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Async Handoff Example ---");

  // A chain can start synchronous and go async at any point. Probes run
  // strictly one at a time and stop at the first healthy endpoint.
  let target = branch()
    .if_(false, "local")
    .to_async()
    .elseif(pending_with(|| healthy("us-east")), "us-east")
    .elseif(pending_with(|| healthy("eu-west")), "eu-west")
    .elseif(pending_with(|| healthy("ap-south")), "ap-south")
    .else_("offline")
    .await;
  info!(target, "routing decision");

  // The async match family accepts pending root keys.
  let region = pending(async {
    tokio::time::sleep(Duration::from_millis(5)).await;
    "eu-west"
  });
  let bucket = matcher()
    .to_async()
    .match_(region)
    .when("us-east", "assets-us")
    .when("eu-west", "assets-eu")
    .otherwise("assets-global")
    .await;
  info!(bucket, "storage decision");
}
