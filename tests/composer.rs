mod common;

use pageflow::{Content, DrawOp, Error, Image, Margins, Paragraph};

#[test]
fn document_flows_across_pages_and_toc_pages_track_it() {
    common::init_logging();
    let mut composer = common::test_composer();

    // 32 words wrap to 8 lines; with the 18.4pt heading, page 0 takes 5 of
    // them and page 1 the remaining 3.
    let mut ch1 = composer.new_chapter("One");
    ch1.add(Content::Paragraph(Paragraph::new(common::words(32))));
    composer.add(Content::Chapter(ch1));

    let mut ch2 = composer.new_chapter("Two");
    ch2.add(Content::Paragraph(Paragraph::new("done")));
    composer.add(Content::Chapter(ch2));

    let blocks = composer.generate().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].ops().len(), 6);

    let toc = composer.toc();
    assert_eq!(toc.entries().len(), 2);
    assert_eq!(toc.entries()[0].page, 0);
    // Chapter two starts on the continuation page even though the overflow
    // happened inside leaf content.
    assert_eq!(toc.entries()[1].page, 1);
}

#[test]
fn toc_entries_follow_document_order() {
    let mut composer = common::test_composer();
    for title in ["One", "Two", "Three"] {
        let mut ch = composer.new_chapter(title);
        ch.add(Content::Paragraph(Paragraph::new("body")));
        composer.add(Content::Chapter(ch));
    }

    composer.generate().unwrap();

    let toc = composer.toc();
    let numbers: Vec<u32> = toc.entries().iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    let titles: Vec<&str> = toc.entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
}

#[test]
fn generation_failure_keeps_earlier_sections() {
    common::init_logging();
    let mut composer = common::test_composer();

    let mut good = composer.new_chapter("Good");
    good.add(Content::Paragraph(Paragraph::new("fine")));
    composer.add(Content::Chapter(good));

    let mut bad = composer.new_chapter("Bad");
    let mut img = Image::from_bytes(&common::png_bytes(4, 4)).unwrap();
    img.scale_to_height(100.0);
    bad.add(Content::Image(img));
    composer.add(Content::Chapter(bad));

    let err = composer.generate().unwrap_err();
    assert!(matches!(err.source, Error::Layout(_)));
    assert_eq!(err.blocks.len(), 1);
    assert_eq!(err.blocks[0].ops().len(), 2);
}

#[test]
fn absolute_chapter_does_not_disturb_the_flow() {
    let mut composer = common::test_composer();

    let mut ch1 = composer.new_chapter("One");
    ch1.add(Content::Paragraph(Paragraph::new("aa")));
    composer.add(Content::Chapter(ch1));

    let mut ch2 = composer.new_chapter("Two");
    ch2.set_pos(5.0, 40.0);
    ch2.set_include_in_toc(false);
    composer.add(Content::Chapter(ch2));

    let ch3 = composer.new_chapter("Three");
    composer.add(Content::Chapter(ch3));

    let blocks = composer.generate().unwrap();
    assert_eq!(blocks.len(), 1);

    let ops = blocks[0].ops();
    // ch1 heading + paragraph, ch2 heading, ch3 heading.
    assert_eq!(ops.len(), 4);

    match &ops[2] {
        DrawOp::Text { x, y, .. } => {
            common::assert_close(*x, 5.0);
            common::assert_close(*y, 40.0);
        }
        other => panic!("expected text op, got {other:?}"),
    }

    // ch3 resumes where ch1 left off: 18.4pt heading + 11.5pt line.
    match &ops[3] {
        DrawOp::Text { x, y, .. } => {
            common::assert_close(*x, 0.0);
            common::assert_close(*y, 29.9);
        }
        other => panic!("expected text op, got {other:?}"),
    }
}

#[test]
fn chapter_margins_shrink_the_granted_area() {
    let mut composer = common::test_composer();

    let mut ch = composer.new_chapter("One");
    ch.set_margins(Margins::new(5.0, 5.0, 10.0, 0.0));
    composer.add(Content::Chapter(ch));

    let blocks = composer.generate().unwrap();
    match &blocks[0].ops()[0] {
        DrawOp::Text { x, y, .. } => {
            common::assert_close(*x, 5.0);
            common::assert_close(*y, 10.0);
        }
        other => panic!("expected text op, got {other:?}"),
    }
}

#[test]
fn top_level_accepts_every_content_kind() {
    let mut composer = common::test_composer();
    let ch = composer.new_chapter("One");

    composer.add(Content::Paragraph(Paragraph::new("loose text")));
    composer.add(Content::Block(pageflow::Block::new(50.0, 20.0)));
    composer.add(Content::Chapter(ch));
    assert_eq!(composer.content_count(), 3);

    let blocks = composer.generate().unwrap();
    assert_eq!(blocks.len(), 1);
}

#[test]
fn content_area_subtracts_page_margins() {
    let composer = common::test_composer();
    let (w, h) = composer.content_area();
    common::assert_close(w, 100.0);
    common::assert_close(h, 80.0);
}
