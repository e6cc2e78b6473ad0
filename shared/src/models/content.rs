//! Page content documents
//!
//! One singleton document per public page, stored in the `content` collection
//! under the page name. Every struct is `#[serde(default)]`, so a partial
//! document is completed from the hard-coded defaults below and an absent
//! document is simply `Default::default()`.

use super::page::Page;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Image used when a record or hero has no image of its own
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Hero banner image used when a page has none configured
pub const PLACEHOLDER_HERO_IMAGE: &str = "/images/placeholder-hero.jpg";

/// A content document bound to one public page.
pub trait PageContent: Serialize + DeserializeOwned + Default + Clone + Send + Sync {
    const PAGE: Page;
}

macro_rules! page_content {
    ($ty:ty, $page:expr) => {
        impl PageContent for $ty {
            const PAGE: Page = $page;
        }
    };
}

// ============================================================================
// Sub-objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    /// Rotated by the carousel when more than one is set
    pub images: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
}

impl Hero {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            images: vec![PLACEHOLDER_HERO_IMAGE.to_string()],
            cta_text: "Plan Your Journey".to_string(),
            cta_link: "/contact".to_string(),
        }
    }

    /// First configured image, or the placeholder hero image
    pub fn primary_image(&self) -> &str {
        self.images
            .iter()
            .map(String::as_str)
            .find(|s| !s.trim().is_empty())
            .unwrap_or(PLACEHOLDER_HERO_IMAGE)
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new("Extraordinary Journeys", "Tailor-made luxury travel")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intro {
    pub title: String,
    pub text: String,
}

impl Intro {
    pub fn new(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

impl SectionHeading {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Default for Quote {
    fn default() -> Self {
        Self {
            text: "The world is a book, and those who do not travel read only one page."
                .to_string(),
            author: "Saint Augustine".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub title: String,
    pub text: String,
    pub button_text: String,
    pub button_link: String,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            title: "Ready to Begin Your Journey?".to_string(),
            text: "Speak with one of our travel designers and start planning today.".to_string(),
            button_text: "Contact Us".to_string(),
            button_link: "/contact".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image: String,
}

impl Default for Story {
    fn default() -> Self {
        Self {
            title: "Our Story".to_string(),
            paragraphs: vec![
                "We started with a simple belief: travel should be effortless, personal and unforgettable.".to_string(),
            ],
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Entry in the about page's values list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreValue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Entry in the services page's "how it works" list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowStep {
    pub id: String,
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: Vec<String>,
}

impl Default for OfficeInfo {
    fn default() -> Self {
        Self {
            address: "12 Harbour Street, London".to_string(),
            phone: "+44 20 0000 0000".to_string(),
            email: "hello@example.com".to_string(),
            hours: vec![
                "Mon - Fri: 9:00 - 18:00".to_string(),
                "Sat: 10:00 - 14:00".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormCopy {
    pub title: String,
    pub subtitle: String,
    /// Labels offered in the inquiry-type select, in display order
    pub inquiry_types: Vec<String>,
    pub success_message: String,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            title: "Send Us a Message".to_string(),
            subtitle: "We reply within one business day.".to_string(),
            inquiry_types: super::contact::InquiryType::ALL
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            success_message: "Thank you! Your message has been sent.".to_string(),
        }
    }
}

// ============================================================================
// Page documents
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    pub hero: Hero,
    pub intro: Intro,
    pub destinations: SectionHeading,
    pub packages: SectionHeading,
    pub testimonials: SectionHeading,
    pub quote: Quote,
    pub cta: CallToAction,
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            hero: Hero::new("Extraordinary Journeys", "Tailor-made luxury travel to the world's most remarkable places"),
            intro: Intro::new(
                "Travel, Thoughtfully Designed",
                "Every itinerary is crafted around you, from private villas to once-in-a-lifetime expeditions.",
            ),
            destinations: SectionHeading::new("Featured Destinations", "Places we know by heart"),
            packages: SectionHeading::new("Signature Packages", "Curated journeys ready to personalise"),
            testimonials: SectionHeading::new("What Our Travellers Say", "Stories from the road"),
            quote: Quote::default(),
            cta: CallToAction::default(),
        }
    }
}

page_content!(HomeContent, Page::Home);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub hero: Hero,
    pub intro: Intro,
    pub story: Story,
    pub values_heading: SectionHeading,
    pub values: Vec<CoreValue>,
    pub quote: Quote,
    pub cta: CallToAction,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            hero: Hero::new("About Us", "The people behind your journeys"),
            intro: Intro::new("Who We Are", "A small team of travel designers obsessed with detail."),
            story: Story::default(),
            values_heading: SectionHeading::new("Our Values", "What guides every trip we plan"),
            values: vec![
                CoreValue {
                    id: "value-1".to_string(),
                    title: "Personal".to_string(),
                    description: "Every journey is designed for one traveller: you.".to_string(),
                    icon: "heart".to_string(),
                },
                CoreValue {
                    id: "value-2".to_string(),
                    title: "Expert".to_string(),
                    description: "We have been where we send you.".to_string(),
                    icon: "compass".to_string(),
                },
                CoreValue {
                    id: "value-3".to_string(),
                    title: "Responsible".to_string(),
                    description: "We partner with operators who protect the places we love.".to_string(),
                    icon: "leaf".to_string(),
                },
            ],
            quote: Quote::default(),
            cta: CallToAction::default(),
        }
    }
}

page_content!(AboutContent, Page::About);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub hero: Hero,
    pub office: OfficeInfo,
    pub form: FormCopy,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            hero: Hero::new("Contact Us", "Let's start planning your next journey"),
            office: OfficeInfo::default(),
            form: FormCopy::default(),
        }
    }
}

page_content!(ContactContent, Page::Contact);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationsContent {
    pub hero: Hero,
    pub intro: Intro,
    pub cta: CallToAction,
}

impl Default for DestinationsContent {
    fn default() -> Self {
        Self {
            hero: Hero::new("Destinations", "Explore the places we love"),
            intro: Intro::new("Where Will You Go?", "From desert camps to island hideaways."),
            cta: CallToAction::default(),
        }
    }
}

page_content!(DestinationsContent, Page::Destinations);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagesContent {
    pub hero: Hero,
    pub intro: Intro,
    pub cta: CallToAction,
}

impl Default for PackagesContent {
    fn default() -> Self {
        Self {
            hero: Hero::new("Travel Packages", "Signature journeys, ready to personalise"),
            intro: Intro::new("Our Packages", "Each package is a starting point; we tailor every detail."),
            cta: CallToAction::default(),
        }
    }
}

page_content!(PackagesContent, Page::Packages);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqContent {
    pub hero: Hero,
    pub intro: Intro,
    pub cta: CallToAction,
}

impl Default for FaqContent {
    fn default() -> Self {
        Self {
            hero: Hero::new("Frequently Asked Questions", "Everything you need to know"),
            intro: Intro::new("How Can We Help?", "Can't find your answer? Get in touch."),
            cta: CallToAction::default(),
        }
    }
}

page_content!(FaqContent, Page::Faq);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryContent {
    pub hero: Hero,
    pub intro: Intro,
}

impl Default for GalleryContent {
    fn default() -> Self {
        Self {
            hero: Hero::new("Gallery", "Moments from our travellers"),
            intro: Intro::new("Through Their Eyes", "A glimpse of the journeys we design."),
        }
    }
}

page_content!(GalleryContent, Page::Gallery);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesContent {
    pub hero: Hero,
    pub intro: Intro,
    pub workflow_heading: SectionHeading,
    pub workflow: Vec<WorkflowStep>,
    pub cta: CallToAction,
}

impl Default for ServicesContent {
    fn default() -> Self {
        let step = |n: u32, title: &str, description: &str| WorkflowStep {
            id: format!("step-{n}"),
            step: n,
            title: title.to_string(),
            description: description.to_string(),
        };
        Self {
            hero: Hero::new("Our Services", "Everything handled, end to end"),
            intro: Intro::new("What We Do", "From flights to private guides, we take care of it all."),
            workflow_heading: SectionHeading::new("How It Works", "Four steps to your perfect trip"),
            workflow: vec![
                step(1, "Consultation", "Tell us how you like to travel."),
                step(2, "Design", "We craft a bespoke itinerary."),
                step(3, "Refine", "We adjust every detail until it is right."),
                step(4, "Travel", "Enjoy, with 24/7 support on the road."),
            ],
            cta: CallToAction::default(),
        }
    }
}

page_content!(ServicesContent, Page::Services);

/// Default document for `page` as JSON
pub fn default_content(page: Page) -> serde_json::Value {
    fn json<C: PageContent>() -> serde_json::Value {
        serde_json::to_value(C::default()).unwrap_or(serde_json::Value::Null)
    }
    match page {
        Page::Home => json::<HomeContent>(),
        Page::About => json::<AboutContent>(),
        Page::Contact => json::<ContactContent>(),
        Page::Destinations => json::<DestinationsContent>(),
        Page::Packages => json::<PackagesContent>(),
        Page::Faq => json::<FaqContent>(),
        Page::Gallery => json::<GalleryContent>(),
        Page::Services => json::<ServicesContent>(),
    }
}
