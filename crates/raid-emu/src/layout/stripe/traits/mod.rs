//! Traits shared by all stripe layouts.

pub mod stripe;
