// Run-sheet mutations. Every operation returns a new, renumbered list and
// leaves the input untouched; out-of-range indices yield an unchanged copy.

use crate::models::{ComponentType, MoveDirection, ServiceComponent, Settings};
use crate::service::catalog::component_config;
use crate::service::duration::with_content;

/// Sets `order_position` to the index of each component.
pub fn renumber(components: &mut [ServiceComponent]) {
    for (position, component) in components.iter_mut().enumerate() {
        component.order_position = position;
    }
}

fn renumbered(mut components: Vec<ServiceComponent>) -> Vec<ServiceComponent> {
    renumber(&mut components);
    components
}

pub fn add_component(
    components: &[ServiceComponent],
    component_type: ComponentType,
) -> Vec<ServiceComponent> {
    let config = component_config(component_type);
    let mut component =
        ServiceComponent::new(component_type, config.label.to_string(), components.len());
    component.duration_minutes = Some(config.default_duration_minutes);

    let mut updated = components.to_vec();
    updated.push(component);
    renumbered(updated)
}

pub fn remove_component(components: &[ServiceComponent], index: usize) -> Vec<ServiceComponent> {
    let mut updated = components.to_vec();
    if index < updated.len() {
        updated.remove(index);
    } else {
        log::debug!("remove_component: index {} out of range", index);
    }
    renumbered(updated)
}

/// Swaps with the neighbour in `direction`. No-op at either end.
pub fn move_component(
    components: &[ServiceComponent],
    index: usize,
    direction: MoveDirection,
) -> Vec<ServiceComponent> {
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => index.checked_add(1),
    };

    let mut updated = components.to_vec();
    match target {
        Some(target) if index < updated.len() && target < updated.len() => {
            updated.swap(index, target)
        }
        _ => log::debug!("move_component: {} {:?} stays in place", index, direction),
    }
    renumbered(updated)
}

/// Takes the component at `source` out and reinserts it at `destination`.
pub fn reorder(
    components: &[ServiceComponent],
    source: usize,
    destination: usize,
) -> Vec<ServiceComponent> {
    let mut updated = components.to_vec();
    if source == destination || source >= updated.len() || destination >= updated.len() {
        return renumbered(updated);
    }

    let component = updated.remove(source);
    updated.insert(destination, component);
    renumbered(updated)
}

/// New content for the component at `index`; the duration follows the text
/// unless it was set by hand.
pub fn update_component_content(
    components: &[ServiceComponent],
    index: usize,
    content: Option<String>,
    settings: &Settings,
) -> Vec<ServiceComponent> {
    let mut updated = components.to_vec();
    if let Some(component) = updated.get_mut(index) {
        *component = with_content(component, content, settings.words_per_minute);
    }
    renumbered(updated)
}

/// Stores a duration typed by the user. `None` or 0 clears it.
pub fn set_manual_duration(
    components: &[ServiceComponent],
    index: usize,
    minutes: Option<u32>,
) -> Vec<ServiceComponent> {
    let mut updated = components.to_vec();
    if let Some(component) = updated.get_mut(index) {
        component.duration_minutes = minutes.filter(|m| *m > 0);
    }
    renumbered(updated)
}
