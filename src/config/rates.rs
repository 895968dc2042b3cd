//! Voucher rates per entitlement category

use serde::{Deserialize, Serialize};

/// Vouchers awarded per calculation period for each entitlement category,
/// plus the fixed monetary face value of one voucher
///
/// Counts are multiplied by the face value only when a total is read, so
/// all downstream arithmetic stays exact in integer pence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherRates {
    /// Vouchers per period for a pregnancy inside its entitlement window
    pub vouchers_per_pregnancy: u32,

    /// Vouchers per period for each child under one year old
    pub vouchers_per_child_under_one: u32,

    /// Vouchers per period for each child between one and four years old
    pub vouchers_per_child_one_to_four: u32,

    /// Face value of a single voucher in pence
    pub voucher_value_in_pence: u32,
}

impl Default for VoucherRates {
    fn default() -> Self {
        Self {
            vouchers_per_pregnancy: 1,
            vouchers_per_child_under_one: 2,
            vouchers_per_child_one_to_four: 1,
            voucher_value_in_pence: 310,
        }
    }
}
