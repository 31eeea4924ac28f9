// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! A text label compared without regard to ASCII case.

/// Display label. Two labels are equal when their texts match ignoring
/// ASCII case, which is why `equals` is written by hand.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

include!("label_equal.rs");
include!(concat!(env!("OUT_DIR"), "/label_generated.rs"));
