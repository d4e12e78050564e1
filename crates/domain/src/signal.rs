use std::sync::LazyLock;

use regex::Regex;

pub const MUSCLE_ATTRIBUTE: &str = "data-muscle";
pub const LABEL_ATTRIBUTE: &str = "aria-label";

static SLUG_LIKE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)[a-z]+(\.(left|right))?$").unwrap());

/// Element of a rendered diagram that can originate an interaction.
pub trait InteractiveNode {
    fn parent(&self) -> Option<&Self>;
    fn attribute(&self, name: &str) -> Option<&str>;

    fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Nearest node, starting with `self`, that carries any of the given attributes.
    fn closest(&self, names: &[&str]) -> Option<&Self> {
        let mut node = Some(self);
        while let Some(current) = node {
            if names.iter().any(|name| current.attribute(name).is_some()) {
                return Some(current);
            }
            node = current.parent();
        }
        None
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyedObject {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug)]
pub struct TargetedEvent<'a, N> {
    pub target: Option<&'a N>,
    pub current_target: Option<&'a N>,
}

impl<'a, N> TargetedEvent<'a, N> {
    pub fn new(target: &'a N) -> Self {
        Self {
            target: Some(target),
            current_target: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectDetail {
    pub slug: Option<String>,
}

/// Event dispatched as `muscle-select` by collaborators that do not call the selection
/// handler directly.
#[derive(Debug)]
pub struct CustomEvent<'a, N> {
    pub detail: Option<SelectDetail>,
    pub event: TargetedEvent<'a, N>,
}

#[derive(Debug)]
pub enum InteractionSignal<'a, N> {
    Raw(&'a str),
    Keyed(KeyedObject),
    Targeted(TargetedEvent<'a, N>),
    Custom(CustomEvent<'a, N>),
}

type Extractor<'a, N> = fn(&InteractionSignal<'a, N>) -> Option<String>;

fn extractors<'a, N: InteractiveNode>() -> [Extractor<'a, N>; 4] {
    [
        from_raw as Extractor<'a, N>,
        from_keyed as Extractor<'a, N>,
        from_detail as Extractor<'a, N>,
        from_target as Extractor<'a, N>,
    ]
}

/// Resolve the muscle slug carried by a signal.
///
/// Extractors are tried in order and the first one yielding a value wins. Raw strings are
/// returned unchanged.
pub fn extract_slug<N: InteractiveNode>(signal: &InteractionSignal<'_, N>) -> Option<String> {
    extractors()
        .into_iter()
        .find_map(|extract| extract(signal))
}

fn from_raw<N>(signal: &InteractionSignal<'_, N>) -> Option<String> {
    match signal {
        InteractionSignal::Raw(value) => Some((*value).to_string()),
        _ => None,
    }
}

fn from_keyed<N>(signal: &InteractionSignal<'_, N>) -> Option<String> {
    let InteractionSignal::Keyed(object) = signal else {
        return None;
    };
    [&object.slug, &object.name, &object.id, &object.key]
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn from_detail<N>(signal: &InteractionSignal<'_, N>) -> Option<String> {
    let InteractionSignal::Custom(CustomEvent {
        detail: Some(detail),
        ..
    }) = signal
    else {
        return None;
    };
    detail.slug.clone().filter(|slug| !slug.is_empty())
}

fn from_target<N: InteractiveNode>(signal: &InteractionSignal<'_, N>) -> Option<String> {
    match signal {
        InteractionSignal::Targeted(event)
        | InteractionSignal::Custom(CustomEvent { event, .. }) => from_event(event),
        InteractionSignal::Raw(_) | InteractionSignal::Keyed(_) => None,
    }
}

fn from_event<N: InteractiveNode>(event: &TargetedEvent<'_, N>) -> Option<String> {
    let target = event.target.or(event.current_target)?;
    let closest = target.closest(&[MUSCLE_ATTRIBUTE, LABEL_ATTRIBUTE]);

    let by_data = attribute(closest, target, MUSCLE_ATTRIBUTE);
    let by_label = attribute(closest, target, LABEL_ATTRIBUTE);

    by_data
        .into_iter()
        .chain(by_label)
        .find(|value| !value.is_empty())
        .or_else(|| {
            closest
                .and_then(N::id)
                .filter(|id| !id.is_empty())
                .or_else(|| target.id().filter(|id| !id.is_empty()))
                .filter(|id| SLUG_LIKE_ID.is_match(id))
        })
        .map(str::to_string)
}

/// Attribute of the closest matching node, falling back to the original target. A present
/// attribute shadows the fallback even if it is empty.
fn attribute<'n, N: InteractiveNode>(
    closest: Option<&'n N>,
    target: &'n N,
    name: &str,
) -> Option<&'n str> {
    closest
        .and_then(|node| node.attribute(name))
        .or_else(|| target.attribute(name))
}
