/// Statement kinds eligible for execution-plan analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Update,
    Delete,
    Insert,
}

impl StatementKind {
    /// Map an upper-cased leading keyword to its statement kind
    pub fn from_keyword(word: &str) -> Option<StatementKind> {
        match word {
            "SELECT" => Some(StatementKind::Select),
            "UPDATE" => Some(StatementKind::Update),
            "DELETE" => Some(StatementKind::Delete),
            "INSERT" => Some(StatementKind::Insert),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatementKind::Select => "select",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
            StatementKind::Insert => "insert",
        };
        write!(f, "{s}")
    }
}

/// Parse event for one recognized statement: its kind plus the inclusive
/// character offsets of its first and last tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementNode {
    pub kind: StatementKind,
    pub start: usize,
    pub stop: usize,
}

/// Half-open [start, end) character interval over the original script,
/// covering one statement's full token range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementSpan {
    pub start: usize,
    pub end: usize,
}

/// Records one span per recognized statement, regardless of nesting depth
///
/// Spans are only appended, never removed or reordered; resolving nested and
/// duplicate spans is the rewriter's job.
#[derive(Debug, Default)]
pub struct SpanCollector {
    spans: Vec<StatementSpan>,
}

impl SpanCollector {
    pub fn new() -> Self {
        SpanCollector { spans: Vec::new() }
    }

    /// Fold a parse-event sequence into a collector
    pub fn from_events(events: &[StatementNode]) -> Self {
        events.iter().fold(SpanCollector::new(), |mut collector, node| {
            collector.record(node);
            collector
        })
    }

    /// Capture one statement's offsets; the node's inclusive stop becomes
    /// the span's exclusive end
    pub fn record(&mut self, node: &StatementNode) {
        self.spans.push(StatementSpan {
            start: node.start,
            end: node.stop + 1,
        });
    }

    pub fn spans(&self) -> &[StatementSpan] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<StatementSpan> {
        self.spans
    }
}
