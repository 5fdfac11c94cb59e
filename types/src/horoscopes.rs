use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: &'static str,
    pub date_range: &'static str,
}

pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign { name: "Aries", symbol: "\u{2648}", element: "Fire", date_range: "Mar 21 - Apr 19" },
    ZodiacSign { name: "Taurus", symbol: "\u{2649}", element: "Earth", date_range: "Apr 20 - May 20" },
    ZodiacSign { name: "Gemini", symbol: "\u{264a}", element: "Air", date_range: "May 21 - Jun 20" },
    ZodiacSign { name: "Cancer", symbol: "\u{264b}", element: "Water", date_range: "Jun 21 - Jul 22" },
    ZodiacSign { name: "Leo", symbol: "\u{264c}", element: "Fire", date_range: "Jul 23 - Aug 22" },
    ZodiacSign { name: "Virgo", symbol: "\u{264d}", element: "Earth", date_range: "Aug 23 - Sep 22" },
    ZodiacSign { name: "Libra", symbol: "\u{264e}", element: "Air", date_range: "Sep 23 - Oct 22" },
    ZodiacSign { name: "Scorpio", symbol: "\u{264f}", element: "Water", date_range: "Oct 23 - Nov 21" },
    ZodiacSign { name: "Sagittarius", symbol: "\u{2650}", element: "Fire", date_range: "Nov 22 - Dec 21" },
    ZodiacSign { name: "Capricorn", symbol: "\u{2651}", element: "Earth", date_range: "Dec 22 - Jan 19" },
    ZodiacSign { name: "Aquarius", symbol: "\u{2652}", element: "Air", date_range: "Jan 20 - Feb 18" },
    ZodiacSign { name: "Pisces", symbol: "\u{2653}", element: "Water", date_range: "Feb 19 - Mar 20" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horoscope {
    pub id: u32,
    pub sign: String,
    pub period: Period,
    pub published: Date,
    pub content: String,
}

pub fn sample_horoscopes() -> Vec<Horoscope> {
    vec![
        Horoscope {
            id: 1,
            sign: "Aries".into(),
            period: Period::Daily,
            published: date(2025, 4, 21),
            content: "Today is a great day for new beginnings. Your energy is high and \
                      you'll find success in starting new projects."
                .into(),
        },
        Horoscope {
            id: 2,
            sign: "Taurus".into(),
            period: Period::Daily,
            published: date(2025, 4, 21),
            content: "Focus on financial stability today. A surprising opportunity may \
                      arise that could boost your income."
                .into(),
        },
        Horoscope {
            id: 3,
            sign: "Gemini".into(),
            period: Period::Weekly,
            published: date(2025, 4, 21),
            content: "Communication is your strong suit this week. Use your gift of gab \
                      to solve any misunderstandings."
                .into(),
        },
    ]
}
