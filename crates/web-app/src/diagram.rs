use aiofitness_domain::{
    CustomEvent, InteractionSignal, InteractiveNode, KeyedObject, Selection, TargetedEvent,
};
use log::debug;

/// Name of the window event other components dispatch to select a muscle.
pub const SELECT_EVENT: &str = "muscle-select";

/// Selectable region of the body diagram, also listed in the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub slug: &'static str,
    pub label: &'static str,
}

pub const REGIONS: [Region; 6] = [
    Region {
        slug: "deltoids",
        label: "Shoulders",
    },
    Region {
        slug: "chest",
        label: "Chest",
    },
    Region {
        slug: "back",
        label: "Back",
    },
    Region {
        slug: "arms",
        label: "Arms",
    },
    Region {
        slug: "core",
        label: "Core",
    },
    Region {
        slug: "legs",
        label: "Legs",
    },
];

/// Routes diagram interactions into the selection it owns.
#[derive(Debug, Default)]
pub struct Diagram {
    selection: Selection,
}

impl Diagram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Pointer click captured on the diagram root.
    pub fn on_click<N: InteractiveNode>(&mut self, event: TargetedEvent<'_, N>) -> bool {
        self.selection
            .handle_select(&InteractionSignal::Targeted(event))
    }

    /// Keyboard activation of a focused region.
    pub fn on_key(&mut self, key: &str, region: &str) -> bool {
        if !matches!(key, "Enter" | " ") {
            return false;
        }
        self.on_region(region)
    }

    /// Direct activation of a region or legend button.
    pub fn on_region(&mut self, slug: &str) -> bool {
        self.selection
            .handle_select::<NoNode>(&InteractionSignal::Raw(slug))
    }

    /// Selection reported by a component as a data object.
    pub fn on_object(&mut self, object: KeyedObject) -> bool {
        self.selection
            .handle_select::<NoNode>(&InteractionSignal::Keyed(object))
    }

    pub fn on_custom<N: InteractiveNode>(&mut self, name: &str, event: CustomEvent<'_, N>) -> bool {
        if name != SELECT_EVENT {
            debug!("ignored event {name:?}");
            return false;
        }
        self.selection.handle_select(&InteractionSignal::Custom(event))
    }

    pub fn on_part(&mut self, key: &str) -> bool {
        self.selection.select_part(key)
    }

    #[must_use]
    pub fn is_highlighted(&self, slug: &str) -> bool {
        self.selection.is_selected(slug)
    }

    /// Legend regions with their highlight state.
    pub fn legend(&self) -> impl Iterator<Item = (Region, bool)> + '_ {
        REGIONS
            .into_iter()
            .map(|region| (region, self.is_highlighted(region.slug)))
    }
}

/// Placeholder node type for signals that never carry an element.
#[derive(Debug)]
enum NoNode {}

impl InteractiveNode for NoNode {
    fn parent(&self) -> Option<&Self> {
        match *self {}
    }

    fn attribute(&self, _: &str) -> Option<&str> {
        match *self {}
    }
}
