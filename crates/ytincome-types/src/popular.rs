//! Well-known channels offered as quick lookups.

use serde::Serialize;

use crate::ChannelQuery;

/// A well-known channel with its handle and content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopularChannel {
    /// Display name.
    pub name: &'static str,
    /// Handle including the leading `@`.
    pub handle: &'static str,
    /// Content category label.
    pub category: &'static str,
}

impl PopularChannel {
    /// Returns the lookup query for this channel.
    #[must_use]
    pub fn query(&self) -> ChannelQuery {
        ChannelQuery::Handle(self.handle.trim_start_matches('@').to_string())
    }
}

/// Quick-access channels, in presentation order.
pub const POPULAR_CHANNELS: &[PopularChannel] = &[
    PopularChannel {
        name: "MrBeast",
        handle: "@MrBeast",
        category: "Entertainment",
    },
    PopularChannel {
        name: "PewDiePie",
        handle: "@pewdiepie",
        category: "Gaming",
    },
    PopularChannel {
        name: "Markiplier",
        handle: "@markiplier",
        category: "Gaming",
    },
    PopularChannel {
        name: "MKBHD",
        handle: "@mkbhd",
        category: "Tech",
    },
    PopularChannel {
        name: "Kurzgesagt",
        handle: "@kurzgesagt",
        category: "Education",
    },
    PopularChannel {
        name: "Veritasium",
        handle: "@veritasium",
        category: "Education",
    },
    PopularChannel {
        name: "Dude Perfect",
        handle: "@DudePerfect",
        category: "Sports",
    },
    PopularChannel {
        name: "Linus Tech Tips",
        handle: "@LinusTechTips",
        category: "Tech",
    },
];
