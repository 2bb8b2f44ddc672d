//! Startup seed data.
//!
//! Builds the 24-lot inventory, the initial copy deck, the amenity cards,
//! and the ROI table, and inserts them as resources. Lot areas carry a small
//! deterministic jitter so the plan doesn't look machine-stamped; the RNG is
//! seeded with a fixed value so every session sees the same plan.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::EditableContent;
use crate::lots::{Lot, LotId, LotInventory, LotStatus};
use crate::market::{Amenity, AmenityIcon, AmenityList, MarketData, RoiTable};

const LOT_COUNT: u32 = 24;

const SEED: u64 = 0x414e_4149_5741; // "ANAIWA"

/// Feature labels are drawn in order from this pool, 1 to 3 per lot.
const FEATURE_POOL: [&str; 3] = ["Vista al lago", "Cerca a portería", "Zona arborizada"];

/// Seed policy: every 5th lot (0-based) is sold, every remaining 7th is
/// reserved, the rest are available. Areas start at 450 m² and step by 10
/// with a 0–50 jitter; prices start at 250M COP and step by 5M.
pub fn seed_lots() -> Vec<Lot> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..LOT_COUNT)
        .map(|i| {
            let status = if i % 5 == 0 {
                LotStatus::Sold
            } else if i % 7 == 0 {
                LotStatus::Reserved
            } else {
                LotStatus::Available
            };
            let feature_count = rng.gen_range(1..=FEATURE_POOL.len());
            Lot {
                id: LotId(i + 1),
                number: format!("L-{}", i + 1),
                area_m2: 450.0 + (i as f32) * 10.0 + rng.gen_range(0.0..50.0),
                price_cop: 250_000_000 + u64::from(i) * 5_000_000,
                status,
                features: FEATURE_POOL[..feature_count]
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
            }
        })
        .collect()
}

pub fn initial_content() -> EditableContent {
    EditableContent::new(
        "ANAIWA ECO RESERVA",
        "Donde la naturaleza abraza tu inversión. Lotes exclusivos en la Zona Norte de Cartagena.",
        "El Momento de Invertir es Ahora",
        "Cartagena de Indias no es solo un destino turístico de talla mundial; es el epicentro del \
         desarrollo inmobiliario en el Caribe. La Zona Norte representa la mayor valorización del \
         país, impulsada por mega-proyectos de infraestructura y un auge turístico sin precedentes. \
         Invertir en Anaiwa es asegurar un patrimonio que crece con la brisa del mar.",
        "Ubicación Estratégica",
        "Situado en el corazón del desarrollo, cerca de colegios internacionales, centros \
         hospitalarios de primer nivel y a solo minutos de las playas de Manzanillo. Conectividad \
         total con el Anillo Vial.",
    )
}

pub fn amenities() -> Vec<Amenity> {
    vec![
        Amenity {
            title: "Eco Trails".to_string(),
            description: "Senderos ecológicos para conectar con la fauna y flora nativa."
                .to_string(),
            icon: AmenityIcon::TreePine,
        },
        Amenity {
            title: "Beach Club".to_string(),
            description: "Acceso exclusivo a club de playa con transporte privado.".to_string(),
            icon: AmenityIcon::Umbrella,
        },
        Amenity {
            title: "Zona Wellness".to_string(),
            description: "Spa, yoga deck y gimnasio al aire libre.".to_string(),
            icon: AmenityIcon::HeartHandshake,
        },
        Amenity {
            title: "Seguridad 24/7".to_string(),
            description: "Monitoreo inteligente y portería de lujo.".to_string(),
            icon: AmenityIcon::ShieldCheck,
        },
    ]
}

pub fn roi_table() -> Vec<MarketData> {
    [
        ("Cartagena (Zona Norte)", 12.5, 18.0),
        ("Santa Marta", 8.2, 12.0),
        ("Medellín", 9.1, 14.0),
        ("Bogotá", 5.5, 8.0),
        ("Barranquilla", 7.8, 6.0),
    ]
    .into_iter()
    .map(|(city, appreciation_pct, tourism_growth_pct)| MarketData {
        city: city.to_string(),
        appreciation_pct,
        tourism_growth_pct,
    })
    .collect()
}

/// Startup system inserting all seeded stores.
pub fn init_site(mut commands: Commands) {
    commands.insert_resource(LotInventory::new(seed_lots()));
    commands.insert_resource(initial_content());
    commands.insert_resource(AmenityList(amenities()));
    commands.insert_resource(RoiTable(roi_table()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentField;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_lots(), seed_lots());
    }

    #[test]
    fn test_seed_counts_are_internally_consistent() {
        let inventory = LotInventory::new(seed_lots());
        let agg = inventory.aggregate();
        assert_eq!(agg.total, 24);
        assert_eq!(agg.available + agg.reserved + agg.sold, agg.total);
        // The modulo policy: 0,5,10,15,20 sold; 7,14,21 reserved.
        assert_eq!(agg.sold, 5);
        assert_eq!(agg.reserved, 3);
        assert_eq!(agg.available, 16);
    }

    #[test]
    fn test_seed_ids_unique_and_fields_sane() {
        let lots = seed_lots();
        let mut ids: Vec<u32> = lots.iter().map(|l| l.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 24);

        for lot in &lots {
            assert!(lot.area_m2 > 0.0);
            assert!(lot.price_cop > 0);
            assert!(!lot.features.is_empty() && lot.features.len() <= 3);
            assert_eq!(lot.number, format!("L-{}", lot.id.0));
        }
        // Areas stay within the documented envelope.
        assert!(lots[0].area_m2 >= 450.0 && lots[0].area_m2 < 500.0);
        assert!(lots[23].area_m2 >= 680.0 && lots[23].area_m2 < 730.0);
        // Price ramp.
        assert_eq!(lots[0].price_cop, 250_000_000);
        assert_eq!(lots[23].price_cop, 365_000_000);
    }

    #[test]
    fn test_initial_content_fields_nonempty() {
        let content = initial_content();
        for field in ContentField::ALL {
            assert!(!content.get(field).is_empty(), "{field:?} must be seeded");
        }
        assert_eq!(content.get(ContentField::HeroTitle), "ANAIWA ECO RESERVA");
    }

    #[test]
    fn test_reference_lists_have_expected_shape() {
        assert_eq!(amenities().len(), 4);
        let roi = roi_table();
        assert_eq!(roi.len(), 5);
        assert!(roi[0].city.contains("Cartagena"));
        // The project's own market leads the table.
        for row in &roi[1..] {
            assert!(row.appreciation_pct < roi[0].appreciation_pct);
        }
    }

    #[test]
    fn test_init_site_inserts_all_stores() {
        let mut app = App::new();
        app.add_systems(Startup, init_site);
        app.update();

        assert_eq!(app.world().resource::<LotInventory>().len(), 24);
        assert_eq!(app.world().resource::<AmenityList>().0.len(), 4);
        assert_eq!(app.world().resource::<RoiTable>().0.len(), 5);
        assert!(app.world().get_resource::<EditableContent>().is_some());
    }
}
