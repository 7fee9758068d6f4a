//! Roast Catalog
//!
//! The fixed phrase lists, one clean and one unfiltered list per slot.
//! The two variants are curated by hand: several lines are rewritten
//! outright rather than having a word swapped, so they are kept as literals.

/// Slot 1, unfiltered
pub const ROASTS_ONE: &[&str] = &[
    "Hannif could trip over a cordless phone and still call it destiny, you damn genius.",
    "If common sense were gasoline, Hannif wouldn't power a damn flashlight.",
    "Hannif's idea of preparation is gluing yesterday's plans to tomorrow's nonsense.",
    "Watching Hannif think is like watching a slow-motion car crash — messy and somehow his fault.",
    "Hannif is the human version of a participation trophy: baffling and slightly embarrassing.",
];

/// Slot 1, clean
pub const ROASTS_ONE_CLEAN: &[&str] = &[
    "Hannif could trip over a cordless phone and still call it destiny, you genius.",
    "If common sense were gasoline, Hannif wouldn't power a small flashlight.",
    "Hannif's idea of preparation is gluing yesterday's plans to tomorrow's nonsense.",
    "Watching Hannif think is like watching a slow-motion car crash — messy and somehow his fault.",
    "Hannif is the human version of a participation trophy: baffling and slightly embarrassing.",
];

/// Slot 2, unfiltered
pub const ROASTS_TWO: &[&str] = &[
    "Hannif's sense of direction is so terrible even breadcrumbs file a missing-person report.",
    "When Hannif says 'I'll handle it', the world quietly braces for impact.",
    "Hannif's confidence is impressive — a delusional billboard of 'mostly wrong'.",
    "Hannif could lose a staring contest with a doorknob and still call the knob dramatic.",
    "Hannif's planning process looks a lot like improv that's been given too much trust.",
];

/// Slot 2, clean
pub const ROASTS_TWO_CLEAN: &[&str] = &[
    "Hannif's sense of direction is so bad even breadcrumbs get worried.",
    "When Hannif says 'I'll handle it', people quietly make backup plans.",
    "Hannif's confidence is impressive — often mistaken, rarely helpful.",
    "Hannif could lose a staring contest with a doorknob and still call the knob dramatic.",
    "Hannif's planning process looks a lot like improv that's been given too much trust.",
];

/// Slot 3, unfiltered
pub const ROASTS_THREE: &[&str] = &[
    "If bad ideas were currency, Hannif would be a filthy, bankrupt tycoon.",
    "Hannif's advice is like a broken GPS: loud, wrong, and somehow convincing.",
    "Calling Hannif a hot mess would be an insult to messes everywhere.",
    "Hannif could start a meeting and somehow make it an hour-long comedy of errors.",
    "If overthinking burned calories, Hannif would be a ripped disaster.",
];

/// Slot 3, clean
pub const ROASTS_THREE_CLEAN: &[&str] = &[
    "If bad ideas were currency, Hannif would be an unfortunate tycoon.",
    "Hannif's advice is like a broken GPS: loud, wrong, and somehow convincing.",
    "Calling Hannif a hot mess would be an insult to messes everywhere.",
    "Hannif could start a meeting and somehow make it an hour-long comedy of errors.",
    "If overthinking burned calories, Hannif would be a very distracted fitness enthusiast.",
];
