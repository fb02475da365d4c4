// Static genetic-marker reference table for the GMCAII protocol.
//
// The table is fixed protocol data: it is built once at process start and
// never written afterwards. Everything downstream refers to entries by id
// through the `MarkerLookup` seam.

use std::collections::HashMap;

use amlpath_model::{GeneticMarker, MarkerCategory, MarkerLookup, RiskLevel};
use lazy_static::lazy_static;

use amlpath_model::MarkerCategory::{FusionGene, GeneMutation, KaryotypeAbnormality};
use amlpath_model::RiskLevel::{High, Intermediate, Low};

/// Number of entries in the protocol's marker table.
pub const MARKER_COUNT: usize = 16;

static GENETIC_MARKERS: [GeneticMarker; MARKER_COUNT] = [
    // Low-risk markers
    GeneticMarker {
        id: "runx1_runx1t1",
        label: "t(8;21) / RUNX1-RUNX1T1",
        category: FusionGene,
        default_risk: Low,
    },
    GeneticMarker {
        id: "cbfb_myh11",
        label: "inv(16) or t(16;16) / CBFb-MYH11",
        category: FusionGene,
        default_risk: Low,
    },
    GeneticMarker {
        id: "kmt2a_mllt11",
        label: "t(1;11) / KMT2A-MLLT11",
        category: FusionGene,
        default_risk: Low,
    },
    GeneticMarker {
        id: "npm1_mut",
        label: "NPM1 mutation (normal karyotype)",
        category: GeneMutation,
        default_risk: Low,
    },
    GeneticMarker {
        id: "cebpa_bzip",
        label: "CEBPA bZIP mutation",
        category: GeneMutation,
        default_risk: Low,
    },
    // Intermediate/high-risk markers
    GeneticMarker {
        id: "kmt2a_mllt3",
        label: "t(9;11) / KMT2A-MLLT3",
        category: FusionGene,
        default_risk: Intermediate,
    },
    GeneticMarker {
        id: "kit_non_17",
        label: "KIT mutation (non exon 17)",
        category: GeneMutation,
        default_risk: Intermediate,
    },
    GeneticMarker {
        id: "kit_exon_17",
        label: "KIT exon 17 mutation",
        category: GeneMutation,
        default_risk: High,
    },
    GeneticMarker {
        id: "flt3_itd",
        label: "FLT3-ITD",
        category: GeneMutation,
        default_risk: High,
    },
    GeneticMarker {
        id: "tp53",
        label: "TP53 mutation",
        category: GeneMutation,
        default_risk: High,
    },
    GeneticMarker {
        id: "complex_karyotype",
        label: "complex karyotype (>= 3 abnormalities)",
        category: KaryotypeAbnormality,
        default_risk: High,
    },
    GeneticMarker {
        id: "minus_5_7",
        label: "-5, -7, 5q-, 7q-",
        category: KaryotypeAbnormality,
        default_risk: High,
    },
    GeneticMarker {
        id: "nup98_re",
        label: "NUP98 rearrangement",
        category: FusionGene,
        default_risk: High,
    },
    GeneticMarker {
        id: "mecom_re",
        label: "MECOM rearrangement / inv(3) / t(3;3)",
        category: FusionGene,
        default_risk: High,
    },
    GeneticMarker {
        id: "bcr_abl1",
        label: "t(9;22) / BCR-ABL1",
        category: FusionGene,
        default_risk: High,
    },
    GeneticMarker {
        id: "ubtf_itd",
        label: "UBTF-ITD",
        category: GeneMutation,
        default_risk: High,
    },
];

/// Immutable marker table with an id index.
#[derive(Debug)]
pub struct MarkerCatalog {
    markers: &'static [GeneticMarker],
    by_id: HashMap<&'static str, usize>,
}

lazy_static! {
    static ref CATALOG: MarkerCatalog = MarkerCatalog::from_table(&GENETIC_MARKERS);
}

/// The process-wide catalog instance.
pub fn catalog() -> &'static MarkerCatalog {
    &CATALOG
}

impl MarkerCatalog {
    fn from_table(markers: &'static [GeneticMarker]) -> Self {
        let mut by_id = HashMap::with_capacity(markers.len());
        for (i, m) in markers.iter().enumerate() {
            let previous = by_id.insert(m.id, i);
            debug_assert!(previous.is_none(), "duplicate marker id in table: {}", m.id);
        }
        Self { markers, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'static GeneticMarker> {
        self.by_id.get(id).map(|&i| &self.markers[i])
    }

    /// All entries, in protocol table order.
    pub fn all(&self) -> &'static [GeneticMarker] {
        self.markers
    }

    /// Entries of one category, in table order.
    pub fn in_category(
        &self,
        category: MarkerCategory,
    ) -> impl Iterator<Item = &'static GeneticMarker> + '_ {
        self.markers.iter().filter(move |m| m.category == category)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MarkerLookup for MarkerCatalog {
    fn marker(&self, id: &str) -> Option<&GeneticMarker> {
        self.get(id)
    }
}
