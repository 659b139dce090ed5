use cricket_shared::field::{self, ReferenceRect};

/// Measure an element's bounding client rect.
///
/// `None` while the element is not mounted yet.
pub fn element_rect(element_id: &str) -> Option<ReferenceRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(element_id)?;
    let rect = element.get_bounding_client_rect();
    Some(ReferenceRect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

/// Client (viewport) pointer location to clamped field percentages, using
/// the live size of `container_id`.
pub fn client_to_field_percent(
    client_x: f64,
    client_y: f64,
    container_id: &str,
) -> Option<(f64, f64)> {
    let rect = element_rect(container_id)?;
    field::pointer_to_field_percent(client_x, client_y, rect)
}

/// Straight-line distance between two client points.
pub fn point_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
