use serde::{Deserialize, Serialize};

use super::localized;

pub const ITEM_COUNT: usize = 30;

/// The four factors of the MEQ-30, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subscale {
    Mystical,
    PositiveMood,
    TimeSpace,
    Ineffability,
}

impl Subscale {
    pub const ALL: [Subscale; 4] = [
        Subscale::Mystical,
        Subscale::PositiveMood,
        Subscale::TimeSpace,
        Subscale::Ineffability,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Subscale::Mystical => "mystical",
            Subscale::PositiveMood => "positive_mood",
            Subscale::TimeSpace => "time_space",
            Subscale::Ineffability => "ineffability",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subscale::Mystical => "Mystical",
            Subscale::PositiveMood => "Positive mood",
            Subscale::TimeSpace => "Transcendence of time and space",
            Subscale::Ineffability => "Ineffability",
        }
    }

    /// Canonical ids belonging to this factor (Barrett et al., 2015).
    pub fn canonical_ids(&self) -> &'static [u16] {
        match self {
            Subscale::Mystical => &[9, 12, 14, 22, 35, 36, 41, 47, 54, 55, 69, 73, 74, 77, 83],
            Subscale::PositiveMood => &[5, 18, 30, 43, 80, 87],
            Subscale::TimeSpace => &[2, 15, 29, 34, 48, 65],
            Subscale::Ineffability => &[6, 23, 86],
        }
    }

    pub fn item_count(&self) -> usize {
        self.canonical_ids().len()
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub canonical_id: u16,
    pub order: u8,
    pub subscale: Subscale,
    texts: &'static [(&'static str, &'static str)],
}

impl Item {
    /// Item wording for `locale`, falling back to English.
    pub fn text(&self, locale: &str) -> &'static str {
        localized(self.texts, locale)
    }

    /// Key under which the item's response travels in an answer map.
    pub fn answer_key(&self) -> String {
        self.canonical_id.to_string()
    }
}

const fn entry(
    canonical_id: u16,
    order: u8,
    subscale: Subscale,
    texts: &'static [(&'static str, &'static str)],
) -> Item {
    Item {
        canonical_id,
        order,
        subscale,
        texts,
    }
}

use self::Subscale::{Ineffability, Mystical, PositiveMood, TimeSpace};

static ITEMS: [Item; ITEM_COUNT] = [
    entry(35, 1, Mystical, &[
        ("en", "Freedom from the limitations of your personal self and feeling a unity or bond with what was felt to be greater than your personal self."),
        ("fa", "رهایی از محدودیت‌های خود شخصی و احساس وحدت یا پیوند با چیزی که بزرگ‌تر از خود شخصی‌تان احساس می‌شد."),
    ]),
    entry(41, 2, Mystical, &[
        ("en", "Experience of pure being and pure awareness (beyond the world of sense impressions)."),
        ("fa", "تجربه‌ی هستی ناب و آگاهی ناب (فراتر از جهان ادراکات حسی)."),
    ]),
    entry(54, 3, Mystical, &[
        ("en", "Experience of oneness in relation to an \"inner world\" within."),
        ("fa", "تجربه‌ی یگانگی در پیوند با «جهانی درونی»."),
    ]),
    entry(77, 4, Mystical, &[
        ("en", "Experience of the fusion of your personal self into a larger whole."),
        ("fa", "تجربه‌ی درآمیختن خود شخصی‌تان در کلی بزرگ‌تر."),
    ]),
    entry(83, 5, Mystical, &[
        ("en", "Experience of unity with ultimate reality."),
        ("fa", "تجربه‌ی وحدت با واقعیت غایی."),
    ]),
    entry(2, 6, TimeSpace, &[
        ("en", "Loss of your usual sense of time."),
        ("fa", "از دست دادن حس معمول زمان."),
    ]),
    entry(15, 7, TimeSpace, &[
        ("en", "Loss of your usual sense of space."),
        ("fa", "از دست دادن حس معمول مکان."),
    ]),
    entry(29, 8, TimeSpace, &[
        ("en", "Loss of usual awareness of where you were."),
        ("fa", "از دست دادن آگاهی معمول از اینکه کجا بودید."),
    ]),
    entry(34, 9, TimeSpace, &[
        ("en", "Sense of being \"outside of\" time, beyond past and future."),
        ("fa", "احساس بودن «بیرون از» زمان، فراتر از گذشته و آینده."),
    ]),
    entry(48, 10, TimeSpace, &[
        ("en", "Being in a realm with no space boundaries."),
        ("fa", "بودن در قلمرویی بدون مرزهای مکانی."),
    ]),
    entry(65, 11, TimeSpace, &[
        ("en", "Experience of timelessness."),
        ("fa", "تجربه‌ی بی‌زمانی."),
    ]),
    entry(6, 12, Ineffability, &[
        ("en", "Sense that the experience cannot be described adequately in words."),
        ("fa", "احساس اینکه این تجربه را نمی‌توان به‌درستی با کلمات توصیف کرد."),
    ]),
    entry(23, 13, Ineffability, &[
        ("en", "Feeling that you could not do justice to your experience by describing it in words."),
        ("fa", "احساس اینکه با توصیف تجربه در قالب کلمات نمی‌توانید حق آن را ادا کنید."),
    ]),
    entry(86, 14, Ineffability, &[
        ("en", "Feeling that it would be difficult to communicate your own experience to others who have not had similar experiences."),
        ("fa", "احساس اینکه انتقال تجربه‌تان به دیگرانی که تجربه‌ی مشابهی نداشته‌اند دشوار است."),
    ]),
    entry(14, 15, Mystical, &[
        ("en", "Experience of oneness or unity with objects and/or persons perceived in your surroundings."),
        ("fa", "تجربه‌ی یگانگی یا وحدت با اشیا و/یا افرادی که در پیرامون خود ادراک می‌کردید."),
    ]),
    entry(47, 16, Mystical, &[
        ("en", "Experience of the insight that \"all is One.\""),
        ("fa", "تجربه‌ی این بینش که «همه یکی است»."),
    ]),
    entry(74, 17, Mystical, &[
        ("en", "Awareness of the life or living presence in all things."),
        ("fa", "آگاهی از زندگی یا حضور زنده در همه‌چیز."),
    ]),
    entry(9, 18, Mystical, &[
        ("en", "Gain of insightful knowledge experienced at an intuitive level."),
        ("fa", "دستیابی به دانشی بصیرت‌آمیز که در سطح شهودی تجربه شد."),
    ]),
    entry(22, 19, Mystical, &[
        ("en", "Certainty of encounter with ultimate reality (in the sense of being able to \"know\" and \"see\" what is really real)."),
        ("fa", "یقین به مواجهه با واقعیت غایی (به این معنا که آنچه را واقعاً واقعی است «بدانید» و «ببینید»)."),
    ]),
    entry(12, 20, Mystical, &[
        ("en", "You are convinced now, as you look back on your experience, that in it you encountered ultimate reality."),
        ("fa", "اکنون که به تجربه‌تان نگاه می‌کنید، متقاعدید که در آن با واقعیت غایی روبه‌رو شدید."),
    ]),
    entry(36, 21, Mystical, &[
        ("en", "Sense of being at a spiritual height."),
        ("fa", "احساس بودن در اوجی معنوی."),
    ]),
    entry(55, 22, Mystical, &[
        ("en", "Sense of reverence."),
        ("fa", "احساس حرمت و تکریم."),
    ]),
    entry(73, 23, Mystical, &[
        ("en", "Feeling that you experienced something profoundly sacred and holy."),
        ("fa", "احساس اینکه چیزی عمیقاً مقدس و قدسی را تجربه کردید."),
    ]),
    entry(69, 24, Mystical, &[
        ("en", "You are convinced now, as you look back on your experience, that in it you \"knew\" and \"saw\" what was really real."),
        ("fa", "اکنون که به تجربه‌تان نگاه می‌کنید، متقاعدید که در آن آنچه را واقعاً واقعی بود «دانستید» و «دیدید»."),
    ]),
    entry(5, 25, PositiveMood, &[
        ("en", "Experience of amazement."),
        ("fa", "تجربه‌ی شگفتی."),
    ]),
    entry(18, 26, PositiveMood, &[
        ("en", "Feelings of tenderness and gentleness."),
        ("fa", "احساس لطافت و نرمی."),
    ]),
    entry(30, 27, PositiveMood, &[
        ("en", "Feelings of peace and tranquility."),
        ("fa", "احساس صلح و آرامش."),
    ]),
    entry(43, 28, PositiveMood, &[
        ("en", "Experience of ecstasy."),
        ("fa", "تجربه‌ی وجد و سرمستی."),
    ]),
    entry(80, 29, PositiveMood, &[
        ("en", "Sense of awe or awesomeness."),
        ("fa", "احساس هیبت و شکوه."),
    ]),
    entry(87, 30, PositiveMood, &[
        ("en", "Feelings of joy."),
        ("fa", "احساس شادی."),
    ]),
];

/// All items in presentation order.
pub fn items() -> &'static [Item] {
    &ITEMS
}

pub fn item(canonical_id: u16) -> Option<&'static Item> {
    ITEMS.iter().find(|item| item.canonical_id == canonical_id)
}

pub fn subscale_of(canonical_id: u16) -> Option<Subscale> {
    item(canonical_id).map(|item| item.subscale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_partitions_thirty_canonical_ids() {
        let ids: BTreeSet<u16> = items().iter().map(|item| item.canonical_id).collect();
        assert_eq!(ids.len(), ITEM_COUNT);

        let counts: Vec<usize> = Subscale::ALL.iter().map(Subscale::item_count).collect();
        assert_eq!(counts, vec![15, 6, 6, 3]);

        for subscale in Subscale::ALL {
            for id in subscale.canonical_ids() {
                assert_eq!(subscale_of(*id), Some(subscale), "item {id}");
            }
        }
    }

    #[test]
    fn presentation_order_has_no_gaps() {
        let orders: Vec<u8> = items().iter().map(|item| item.order).collect();
        assert_eq!(orders, (1..=30).collect::<Vec<u8>>());
    }

    #[test]
    fn item_text_is_localized_with_english_fallback() {
        let timeless = item(65).expect("item 65 exists");
        assert_eq!(timeless.text("en"), "Experience of timelessness.");
        assert_eq!(timeless.text("fa"), "تجربه‌ی بی‌زمانی.");
        assert_eq!(timeless.text("sv"), "Experience of timelessness.");
        assert!(item(1).is_none());
    }
}
