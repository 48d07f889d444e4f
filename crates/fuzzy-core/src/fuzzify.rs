/// Fuzzification of raw inputs into membership vectors.
///
/// Both dimensions use the same construction: a complete three-category
/// partition over two linear segments. Below the first breakpoint the lowest
/// category holds 1, above the last breakpoint the highest category holds 1,
/// and each segment interpolates between two adjacent categories. Every
/// segment includes its upper bound (`low < x <= high`).
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::category::{Membership, PriceLevel, ServiceLevel};
use crate::pipeline::CandidateRecord;

/// Three ascending breakpoints defining a complete fuzzy partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl Partition {
    pub const fn new(low: f64, mid: f64, high: f64) -> Self {
        Self { low, mid, high }
    }

    pub fn degrees(&self, x: f64) -> [f64; 3] {
        let Self { low, mid, high } = *self;
        if x <= low {
            [1.0, 0.0, 0.0]
        } else if x <= mid {
            let span = mid - low;
            [(mid - x) / span, (x - low) / span, 0.0]
        } else if x <= high {
            let span = high - mid;
            [0.0, (high - x) / span, (x - mid) / span]
        } else {
            [0.0, 0.0, 1.0]
        }
    }
}

pub const SERVICE_PARTITION: Partition = Partition::new(40.0, 70.0, 90.0);
pub const PRICE_PARTITION: Partition = Partition::new(30_000.0, 40_000.0, 50_000.0);

/// Documented input ranges. Values outside them still score.
pub const SERVICE_DOMAIN: RangeInclusive<f64> = 1.0..=100.0;
pub const PRICE_DOMAIN: RangeInclusive<f64> = 25_000.0..=55_000.0;

pub fn fuzzify_service(quality: f64) -> Membership<ServiceLevel> {
    Membership::from_degrees(SERVICE_PARTITION.degrees(quality))
}

pub fn fuzzify_price(price: f64) -> Membership<PriceLevel> {
    Membership::from_degrees(PRICE_PARTITION.degrees(price))
}

/// An input value outside its documented range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainWarning {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

pub fn check_domain(record: &CandidateRecord) -> Vec<DomainWarning> {
    let checks = [
        ("service_quality", record.service_quality, SERVICE_DOMAIN),
        ("price", record.price, PRICE_DOMAIN),
    ];
    checks
        .into_iter()
        .filter(|(_, value, range)| !range.contains(value))
        .map(|(field, value, range)| DomainWarning {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
        .collect()
}
