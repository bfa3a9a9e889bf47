use pdf_booklet::*;

fn mixed_content(texts: usize, images: usize) -> Vec<ContentItem> {
    let mut content: Vec<ContentItem> = (0..texts)
        .map(|i| ContentItem::Text {
            content: format!("Paragraph {}", i),
            style: TextStyle::default(),
        })
        .collect();
    content.extend((0..images).map(|i| ContentItem::Image {
        path: format!("temp_images/image_{}.png", i).into(),
        width_pt: 288.0,
    }));
    content
}

#[test]
fn test_stats_single_partial_sheet() {
    let stats = calculate_statistics(&mixed_content(3, 0), &BookletOptions::default()).unwrap();

    assert_eq!(stats.content_items, 3);
    assert_eq!(stats.text_items, 3);
    assert_eq!(stats.image_items, 0);
    assert_eq!(stats.sheets, 1);
    assert_eq!(stats.sides, 2);
    assert_eq!(stats.empty_slots, 1);
}

#[test]
fn test_stats_mixed_content() {
    let stats = calculate_statistics(&mixed_content(7, 2), &BookletOptions::default()).unwrap();

    assert_eq!(stats.content_items, 9);
    assert_eq!(stats.text_items, 7);
    assert_eq!(stats.image_items, 2);
    assert_eq!(stats.sheets, 3);
    assert_eq!(stats.sides, 6);
    assert_eq!(stats.empty_slots, 3);
}

#[test]
fn test_stats_exact_multiple_has_no_empty_slots() {
    let stats = calculate_statistics(&mixed_content(8, 0), &BookletOptions::default()).unwrap();

    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.sides, 4);
    assert_eq!(stats.empty_slots, 0);
}

#[test]
fn test_stats_empty_content() {
    let stats = calculate_statistics(&[], &BookletOptions::default()).unwrap();

    assert_eq!(stats.sheets, 0);
    assert_eq!(stats.sides, 0);
    assert_eq!(stats.empty_slots, 0);
}

#[test]
fn test_stats_report_oriented_leaf() {
    let options = BookletOptions::with_orientation(Orientation::Landscape);
    let stats = calculate_statistics(&mixed_content(1, 0), &options).unwrap();

    assert_eq!((stats.leaf_width_mm, stats.leaf_height_mm), (140.0, 210.0));
}
