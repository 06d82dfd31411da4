//! # Cash on Delivery
//!
//! COD settlement happens physically at the doorstep, so creation needs a
//! delivery date and time slot, and the method carries its own district fee
//! schedule, separate from (and charged on top of) the generic shipping
//! fee that is already inside the order total.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Delivery Slots
// =============================================================================

/// Fixed set of COD delivery time slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliverySlot {
    Morning,
    Afternoon,
    Evening,
}

/// All slots, in display order.
pub const ALL_SLOTS: [DeliverySlot; 3] = [
    DeliverySlot::Morning,
    DeliverySlot::Afternoon,
    DeliverySlot::Evening,
];

impl DeliverySlot {
    /// Customer-facing slot label.
    pub fn label(&self) -> &'static str {
        match self {
            DeliverySlot::Morning => "9:00 AM - 12:00 PM",
            DeliverySlot::Afternoon => "12:00 PM - 3:00 PM",
            DeliverySlot::Evening => "3:00 PM - 6:00 PM",
        }
    }
}

/// Availability of the delivery slots.
///
/// Each slot is independently markable unavailable (courier capacity,
/// public holidays); the default schedule has every slot open.
#[derive(Debug, Clone, Default)]
pub struct SlotSchedule {
    unavailable: HashSet<DeliverySlot>,
}

impl SlotSchedule {
    /// Schedule with every slot available.
    pub fn new() -> Self {
        SlotSchedule::default()
    }

    /// Marks a slot unavailable.
    pub fn mark_unavailable(&mut self, slot: DeliverySlot) {
        self.unavailable.insert(slot);
    }

    /// Re-opens a slot.
    pub fn mark_available(&mut self, slot: DeliverySlot) {
        self.unavailable.remove(&slot);
    }

    /// Whether a slot can currently be booked.
    pub fn is_available(&self, slot: DeliverySlot) -> bool {
        !self.unavailable.contains(&slot)
    }

    /// The bookable slots, in display order.
    pub fn available_slots(&self) -> Vec<DeliverySlot> {
        ALL_SLOTS
            .iter()
            .copied()
            .filter(|s| self.is_available(*s))
            .collect()
    }
}

// =============================================================================
// COD Delivery Fees
// =============================================================================

/// COD delivery fee for districts absent from the table.
pub const DEFAULT_COD_FEE: Money = Money::from_rupees(250);

/// District → COD delivery fee, in rupees.
///
/// A separate schedule from the shipping table: it prices the courier
/// collecting cash, not the parcel itself.
const COD_FEES: &[(&str, i64)] = &[
    ("Colombo", 150),
    ("Gampaha", 180),
    ("Kalutara", 180),
    ("Kandy", 200),
    ("Galle", 220),
    ("Matara", 220),
    ("Kurunegala", 220),
];

/// COD delivery fee for a destination district.
pub fn delivery_fee(district: &str) -> Money {
    COD_FEES
        .iter()
        .find(|(d, _)| *d == district)
        .map(|(_, fee)| Money::from_rupees(*fee))
        .unwrap_or(DEFAULT_COD_FEE)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_schedule() {
        let mut schedule = SlotSchedule::new();
        assert_eq!(schedule.available_slots(), ALL_SLOTS.to_vec());

        schedule.mark_unavailable(DeliverySlot::Afternoon);
        assert!(!schedule.is_available(DeliverySlot::Afternoon));
        assert_eq!(
            schedule.available_slots(),
            vec![DeliverySlot::Morning, DeliverySlot::Evening]
        );

        schedule.mark_available(DeliverySlot::Afternoon);
        assert!(schedule.is_available(DeliverySlot::Afternoon));
    }

    #[test]
    fn test_delivery_fee_table() {
        assert_eq!(delivery_fee("Colombo").rupees(), 150);
        assert_eq!(delivery_fee("Kandy").rupees(), 200);
        assert_eq!(delivery_fee("Trincomalee"), DEFAULT_COD_FEE);
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(DeliverySlot::Morning.label(), "9:00 AM - 12:00 PM");
    }
}
