use sqlexplainer::{SpanCollector, StatementKind, StatementNode, StatementSpan};

#[test]
fn test_record_converts_inclusive_stop_to_exclusive_end() {
    let mut collector = SpanCollector::new();
    collector.record(&StatementNode {
        kind: StatementKind::Select,
        start: 6,
        stop: 21,
    });
    assert_eq!(collector.spans(), &[StatementSpan { start: 6, end: 22 }]);
}

#[test]
fn test_from_events_keeps_encounter_order() {
    let events = [
        StatementNode {
            kind: StatementKind::Insert,
            start: 0,
            stop: 29,
        },
        StatementNode {
            kind: StatementKind::Select,
            start: 14,
            stop: 28,
        },
    ];
    let collector = SpanCollector::from_events(&events);
    assert_eq!(
        collector.into_spans(),
        vec![
            StatementSpan { start: 0, end: 30 },
            StatementSpan { start: 14, end: 29 },
        ]
    );
}

#[test]
fn test_collector_keeps_duplicate_spans() {
    let node = StatementNode {
        kind: StatementKind::Delete,
        start: 3,
        stop: 9,
    };
    let mut collector = SpanCollector::new();
    collector.record(&node);
    collector.record(&node);
    assert_eq!(collector.spans().len(), 2);
}
