// elsewhen/core/examples/match_comparator.rs

use elsewhen::{matcher, Matcher};
use tracing::info;

#[derive(Clone, Debug)]
struct Version {
  major: u32,
  minor: u32,
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Match Expression Example ---");

  // Default comparator: value equality.
  let greeting = matcher()
    .case("fr")
    .when("en", "hello")
    .when("fr", "bonjour")
    .when("es", "hola")
    .otherwise("…");
  info!(greeting, "matched by equality");

  // Custom comparator: compare versions by major component only.
  let by_major = Matcher::with_comparator(|root: &Version, candidate: &Version| root.major == candidate.major);
  let channel = by_major
    .case(Version { major: 2, minor: 7 })
    .when(Version { major: 1, minor: 0 }, "legacy")
    .when(Version { major: 2, minor: 0 }, "stable")
    .when(Version { major: 3, minor: 0 }, "beta")
    .otherwise("unknown");
  info!(channel, "matched by major version");

  // Deriving a new comparator leaves earlier matchers untouched.
  let strict = matcher::<u32>();
  let by_parity = strict.compare_by(|root, candidate| root % 2 == candidate % 2);
  info!(
    strict = strict.case(7u32).when(1, "one").otherwise("no match"),
    parity = by_parity.case(7u32).when(1, "odd").otherwise("no match"),
    "same chain, different comparators"
  );
}
