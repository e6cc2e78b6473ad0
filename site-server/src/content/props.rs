//! Per-page props handed to the presentation layer and the JSON API

use serde::Serialize;
use shared::models::{
    AboutContent, Category, ContactContent, Destination, DestinationsContent, FaqContent, FaqItem,
    GalleryCategory, GalleryContent, GalleryImage, HomeContent, Package, PackagesContent, Service,
    ServicesContent, Testimonial,
};

#[derive(Debug, Clone, Serialize)]
pub struct HomeProps {
    pub content: HomeContent,
    pub featured_destinations: Vec<Destination>,
    pub featured_packages: Vec<Package>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutProps {
    pub content: AboutContent,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationsProps {
    pub content: DestinationsContent,
    pub destinations: Vec<Destination>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationDetailProps {
    pub destination: Destination,
    /// Packages whose destination names this one
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackagesProps {
    pub content: PackagesContent,
    pub categories: Vec<CategoryGroup>,
    /// Packages with no category or an unknown one
    pub uncategorized: Vec<Package>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageDetailProps {
    pub package: Package,
    pub category: Option<Category>,
    pub related: Vec<Package>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqGroup {
    pub category: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqProps {
    pub content: FaqContent,
    pub groups: Vec<FaqGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryProps {
    pub content: GalleryContent,
    /// Filter list; the first entry is always the synthetic "All"
    pub categories: Vec<GalleryCategory>,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesProps {
    pub content: ServicesContent,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactProps {
    pub content: ContactContent,
}

/// Props of any listing page
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageProps {
    Home(HomeProps),
    About(AboutProps),
    Contact(ContactProps),
    Destinations(DestinationsProps),
    Packages(PackagesProps),
    Faq(FaqProps),
    Gallery(GalleryProps),
    Services(ServicesProps),
}
