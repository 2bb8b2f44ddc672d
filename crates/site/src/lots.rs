//! Lot inventory store.
//!
//! Holds the fixed collection of sellable lot records for the master plan.
//! Lots are seeded once at startup ([`crate::seed`]), mutated only by a
//! full-record replace keyed on [`LotId`], and never deleted during a session.
//! Derived counts ([`LotAggregate`]) are recomputed from the live snapshot on
//! every call so views can never read stale totals.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Records
// =============================================================================

/// Stable, unique identifier for a lot. Immutable after seeding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LotId(pub u32);

/// Sales status of a lot. Client-side and ephemeral — there is no real
/// reservation workflow behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotStatus {
    Available,
    Reserved,
    Sold,
}

impl LotStatus {
    pub const ALL: [LotStatus; 3] = [LotStatus::Available, LotStatus::Reserved, LotStatus::Sold];

    /// Display label (the page is in Spanish).
    pub fn label(self) -> &'static str {
        match self {
            LotStatus::Available => "Disponible",
            LotStatus::Reserved => "Reservado",
            LotStatus::Sold => "Vendido",
        }
    }
}

/// A sellable parcel record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: LotId,
    /// Display label, e.g. "L-7".
    pub number: String,
    /// Approximate area in square meters. Always positive.
    pub area_m2: f32,
    /// Price in Colombian pesos, whole units.
    pub price_cop: u64,
    pub status: LotStatus,
    /// Ordered list of short selling-point labels.
    pub features: Vec<String>,
}

// =============================================================================
// Aggregate counts
// =============================================================================

/// Per-status counts over the current inventory snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LotAggregate {
    pub total: usize,
    pub available: usize,
    pub reserved: usize,
    pub sold: usize,
}

// =============================================================================
// Store
// =============================================================================

/// Replace target did not exist in the inventory.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no lot with id {0:?} in the inventory")]
pub struct LotNotFound(pub LotId);

/// The lot collection. Owned by the ECS world; systems are the only writers.
#[derive(Resource, Default, Debug, Clone, Serialize, Deserialize)]
pub struct LotInventory {
    lots: Vec<Lot>,
}

impl LotInventory {
    /// Ids must be unique; the seed guarantees this and replace preserves it.
    pub fn new(lots: Vec<Lot>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<LotId> = lots.iter().map(|l| l.id).collect();
                ids.sort();
                ids.dedup();
                ids.len() == lots.len()
            },
            "duplicate lot ids in seed"
        );
        Self { lots }
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lot> {
        self.lots.iter()
    }

    pub fn get(&self, id: LotId) -> Option<&Lot> {
        self.lots.iter().find(|l| l.id == id)
    }

    /// Replace the record whose id matches `lot.id`, entirely.
    ///
    /// Errors (rather than silently no-oping) when the id is unknown; the
    /// event-drain boundary logs and drops such intents.
    pub fn replace(&mut self, lot: Lot) -> Result<(), LotNotFound> {
        match self.lots.iter_mut().find(|l| l.id == lot.id) {
            Some(slot) => {
                *slot = lot;
                Ok(())
            }
            None => Err(LotNotFound(lot.id)),
        }
    }

    /// Recomputed from the current snapshot on every call — no cached state.
    pub fn aggregate(&self) -> LotAggregate {
        let mut agg = LotAggregate {
            total: self.lots.len(),
            ..Default::default()
        };
        for lot in &self.lots {
            match lot.status {
                LotStatus::Available => agg.available += 1,
                LotStatus::Reserved => agg.reserved += 1,
                LotStatus::Sold => agg.sold += 1,
            }
        }
        agg
    }
}

// =============================================================================
// Update intents
// =============================================================================

/// Full-record replace intent, dispatched by the presentation layer.
#[derive(Event, Debug, Clone)]
pub struct UpdateLotEvent(pub Lot);

/// Drains [`UpdateLotEvent`]s into the store. Unknown ids are logged and
/// dropped; nothing here is fatal.
pub fn apply_lot_updates(
    mut events: EventReader<UpdateLotEvent>,
    mut inventory: ResMut<LotInventory>,
) {
    for UpdateLotEvent(lot) in events.read() {
        if let Err(e) = inventory.replace(lot.clone()) {
            warn!("dropping lot update: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot(id: u32, status: LotStatus) -> Lot {
        Lot {
            id: LotId(id),
            number: format!("L-{id}"),
            area_m2: 450.0,
            price_cop: 250_000_000,
            status,
            features: vec!["Vista al lago".to_string()],
        }
    }

    fn small_inventory() -> LotInventory {
        LotInventory::new(vec![
            lot(1, LotStatus::Available),
            lot(2, LotStatus::Reserved),
            lot(3, LotStatus::Sold),
        ])
    }

    #[test]
    fn test_replace_updates_matching_record_only() {
        let mut inv = small_inventory();
        let before: Vec<Lot> = inv.iter().cloned().collect();

        let mut updated = lot(2, LotStatus::Sold);
        updated.price_cop = 999_000_000;
        updated.area_m2 = 512.5;
        inv.replace(updated.clone()).unwrap();

        assert_eq!(inv.get(LotId(2)), Some(&updated));
        assert_eq!(inv.get(LotId(1)), Some(&before[0]));
        assert_eq!(inv.get(LotId(3)), Some(&before[2]));
    }

    #[test]
    fn test_replace_unknown_id_errors_and_leaves_store_untouched() {
        let mut inv = small_inventory();
        let before: Vec<Lot> = inv.iter().cloned().collect();

        let err = inv.replace(lot(42, LotStatus::Available)).unwrap_err();
        assert_eq!(err, LotNotFound(LotId(42)));
        assert_eq!(inv.iter().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_aggregate_counts_sum_to_total() {
        let mut inv = small_inventory();
        let agg = inv.aggregate();
        assert_eq!(agg.total, 3);
        assert_eq!(agg.available + agg.reserved + agg.sold, agg.total);

        // Flip statuses around and re-check after every replace.
        for (id, status) in [
            (1, LotStatus::Sold),
            (2, LotStatus::Sold),
            (3, LotStatus::Available),
            (1, LotStatus::Reserved),
        ] {
            let mut l = inv.get(LotId(id)).unwrap().clone();
            l.status = status;
            inv.replace(l).unwrap();
            let agg = inv.aggregate();
            assert_eq!(agg.available + agg.reserved + agg.sold, agg.total);
            assert_eq!(agg.total, 3);
        }
    }

    #[test]
    fn test_aggregate_reflects_latest_snapshot() {
        let mut inv = small_inventory();
        assert_eq!(inv.aggregate().sold, 1);

        let mut l = inv.get(LotId(1)).unwrap().clone();
        l.status = LotStatus::Sold;
        inv.replace(l).unwrap();
        assert_eq!(inv.aggregate().sold, 2);
        assert_eq!(inv.aggregate().available, 0);
    }

    #[test]
    fn test_update_event_drains_into_store() {
        let mut app = App::new();
        app.add_event::<UpdateLotEvent>();
        app.insert_resource(small_inventory());
        app.add_systems(Update, apply_lot_updates);

        let mut updated = lot(3, LotStatus::Available);
        updated.features = vec!["Zona arborizada".to_string()];
        app.world_mut().send_event(UpdateLotEvent(updated.clone()));
        app.update();

        let inv = app.world().resource::<LotInventory>();
        assert_eq!(inv.get(LotId(3)), Some(&updated));
    }

    #[test]
    fn test_update_event_with_unknown_id_is_dropped() {
        let mut app = App::new();
        app.add_event::<UpdateLotEvent>();
        app.insert_resource(small_inventory());
        app.add_systems(Update, apply_lot_updates);

        app.world_mut()
            .send_event(UpdateLotEvent(lot(99, LotStatus::Sold)));
        app.update();

        let inv = app.world().resource::<LotInventory>();
        assert_eq!(inv.len(), 3);
        assert!(inv.get(LotId(99)).is_none());
    }

    #[test]
    fn test_status_labels_distinct() {
        for i in 0..LotStatus::ALL.len() {
            for j in (i + 1)..LotStatus::ALL.len() {
                assert_ne!(LotStatus::ALL[i].label(), LotStatus::ALL[j].label());
            }
        }
    }
}
