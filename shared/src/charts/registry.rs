use crate::charts::spec::ChartKind;
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Drawable building blocks a chart surface has to know about before it can
/// draw a given kind of chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartElement {
    CategoryScale,
    LinearScale,
    BarElement,
    LineElement,
    PointElement,
    ArcElement,
    Title,
    Tooltip,
    Legend,
}

impl ChartElement {
    pub const ALL: [ChartElement; 9] = [
        ChartElement::CategoryScale,
        ChartElement::LinearScale,
        ChartElement::BarElement,
        ChartElement::LineElement,
        ChartElement::PointElement,
        ChartElement::ArcElement,
        ChartElement::Title,
        ChartElement::Tooltip,
        ChartElement::Legend,
    ];

    pub fn required_for(kind: ChartKind) -> &'static [ChartElement] {
        match kind {
            ChartKind::Bar => &[
                ChartElement::CategoryScale,
                ChartElement::LinearScale,
                ChartElement::BarElement,
            ],
            ChartKind::Line => &[
                ChartElement::CategoryScale,
                ChartElement::LinearScale,
                ChartElement::LineElement,
                ChartElement::PointElement,
            ],
            ChartKind::Pie => &[ChartElement::ArcElement],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    elements: BTreeSet<ChartElement>,
}

impl ChartRegistry {
    pub fn with_elements(elements: &[ChartElement]) -> Self {
        Self {
            elements: elements.iter().copied().collect(),
        }
    }

    pub fn is_registered(&self, element: ChartElement) -> bool {
        self.elements.contains(&element)
    }

    pub fn supports(&self, kind: ChartKind) -> bool {
        ChartElement::required_for(kind)
            .iter()
            .all(|element| self.is_registered(*element))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

static REGISTRY: OnceCell<ChartRegistry> = OnceCell::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// Registers every chart element once per process and returns the registry.
///
/// Safe to call from every component instance; calls after the first return
/// the existing registry without registering again.
pub fn register_chart_elements() -> &'static ChartRegistry {
    REGISTRY.get_or_init(|| {
        REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
        debug!("Registering {} chart elements", ChartElement::ALL.len());
        ChartRegistry::with_elements(&ChartElement::ALL)
    })
}

/// How many times the registration body actually ran.
pub fn registration_count() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}
