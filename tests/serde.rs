// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg(feature = "serde1")]

use rand_array::rngs::Pcg64;
use rand_array::{Algorithm, AnyGenerator, ArrayViewMut, Distr, ElementKind, Generator};

#[test]
fn request_from_json() {
    let config = r#"[
        {"distribution": "uniform", "high": 4.0},
        {"distribution": "gamma", "k": 2.0},
        {"distribution": "negative_binomial", "n": 4, "p": 0.25},
        {"distribution": "discrete", "weights": [1.0, 0.0, 2.0]}
    ]"#;
    let requests: Vec<Distr> = serde_json::from_str(config).unwrap();
    assert_eq!(requests[0], Distr::Uniform { low: 0.0, high: 4.0 });
    assert_eq!(requests[1], Distr::gamma(2.0));
    assert_eq!(requests[2], Distr::NegativeBinomial { n: 4, p: 0.25 });

    let mut gen = Generator::<Pcg64>::new(Some(1));
    let mut counts = [0u32; 100];
    gen.sample(&mut ArrayViewMut::contiguous(&mut counts), &requests[3])
        .unwrap();
    assert!(counts.iter().all(|&c| c == 0 || c == 2));
}

#[test]
fn algorithm_and_kind_names() {
    let algorithm: Algorithm = serde_json::from_str("\"mt64\"").unwrap();
    assert_eq!(algorithm, Algorithm::Mt64);
    assert_eq!(AnyGenerator::new(algorithm, Some(0)).algorithm(), Algorithm::Mt64);

    let kinds: Vec<ElementKind> = serde_json::from_str(r#"["int8", "float32"]"#).unwrap();
    assert_eq!(kinds, [ElementKind::Int8, ElementKind::Float32]);
}

#[test]
fn pcg_engine_state_round_trip() {
    let mut gen = Generator::<Pcg64>::new(Some(9));
    gen.random();
    let bytes = bincode::serialize(gen.engine()).unwrap();
    let restored: Pcg64 = bincode::deserialize(&bytes).unwrap();
    assert_eq!(&restored, gen.engine());
}
