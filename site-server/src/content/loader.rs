//! Content loader
//!
//! Reads the page document plus the collections a page shows and shapes them
//! into props. Read failures never fail a listing page: they are logged and
//! the page falls back to defaults (content) or an empty list (collections).
//! Detail lookups do fail, with 404 for an unknown id.

use super::props::*;
use crate::db::DocumentStore;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AboutContent, Category, ContactContent, Destination, DestinationsContent, FaqContent, FaqItem,
    GalleryCategory, GalleryContent, GalleryImage, HomeContent, Package, PackagesContent, Page,
    PageContent, Record, Service, ServicesContent, Testimonial,
};

/// Records shown in each home page teaser
pub const FEATURED_LIMIT: usize = 3;

/// Related packages shown on a package page
pub const RELATED_LIMIT: usize = 3;

/// Id of the synthetic gallery filter that shows every image
pub const ALL_FILTER_ID: &str = "all";

#[derive(Clone)]
pub struct ContentLoader {
    store: DocumentStore,
}

impl ContentLoader {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Page document, or its defaults when absent or unreadable
    pub async fn page_content<C: PageContent>(&self) -> C {
        match self.store.content::<C>().await {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::debug!(page = %C::PAGE, "No content document, using defaults");
                C::default()
            }
            Err(e) => {
                tracing::error!(page = %C::PAGE, error = %e, "Failed to load page content, using defaults");
                C::default()
            }
        }
    }

    /// Every record of a collection, or nothing when unreadable
    pub async fn collection<R: Record>(&self) -> Vec<R> {
        self.store.list::<R>().await.unwrap_or_else(|e| {
            tracing::error!(collection = %R::COLLECTION, error = %e, "Failed to load collection");
            Vec::new()
        })
    }

    pub async fn load(&self, page: Page) -> PageProps {
        match page {
            Page::Home => PageProps::Home(self.home().await),
            Page::About => PageProps::About(self.about().await),
            Page::Contact => PageProps::Contact(self.contact().await),
            Page::Destinations => PageProps::Destinations(self.destinations().await),
            Page::Packages => PageProps::Packages(self.packages().await),
            Page::Faq => PageProps::Faq(self.faq().await),
            Page::Gallery => PageProps::Gallery(self.gallery().await),
            Page::Services => PageProps::Services(self.services().await),
        }
    }

    pub async fn home(&self) -> HomeProps {
        let content = self.page_content::<HomeContent>().await;
        let destinations = self.collection::<Destination>().await;
        let packages = self.collection::<Package>().await;
        let testimonials = self.collection::<Testimonial>().await;

        HomeProps {
            content,
            featured_destinations: pick_featured(destinations, |d| d.featured, FEATURED_LIMIT),
            featured_packages: pick_featured(packages, |p| p.featured, FEATURED_LIMIT),
            testimonials,
        }
    }

    pub async fn about(&self) -> AboutProps {
        AboutProps {
            content: self.page_content::<AboutContent>().await,
            testimonials: self.collection::<Testimonial>().await,
        }
    }

    pub async fn contact(&self) -> ContactProps {
        ContactProps {
            content: self.page_content::<ContactContent>().await,
        }
    }

    pub async fn destinations(&self) -> DestinationsProps {
        DestinationsProps {
            content: self.page_content::<DestinationsContent>().await,
            destinations: self.collection::<Destination>().await,
        }
    }

    pub async fn destination_detail(&self, id: &str) -> AppResult<DestinationDetailProps> {
        let destination = self
            .store
            .get::<Destination>(id)
            .await
            .map_err(|e| {
                tracing::error!(id = %id, error = %e, "Failed to load destination");
                AppError::from(e)
            })?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::DestinationNotFound,
                    format!("Destination {id} not found"),
                )
            })?;

        let packages = self
            .collection::<Package>()
            .await
            .into_iter()
            .filter(|p| destination.matches_name(&p.destination))
            .collect();

        Ok(DestinationDetailProps {
            destination,
            packages,
        })
    }

    pub async fn packages(&self) -> PackagesProps {
        let content = self.page_content::<PackagesContent>().await;
        let categories = self.collection::<Category>().await;
        let packages = self.collection::<Package>().await;
        let (categories, uncategorized) = group_packages(categories, packages);

        PackagesProps {
            content,
            categories,
            uncategorized,
        }
    }

    pub async fn package_detail(&self, id: &str) -> AppResult<PackageDetailProps> {
        let package = self
            .store
            .get::<Package>(id)
            .await
            .map_err(|e| {
                tracing::error!(id = %id, error = %e, "Failed to load package");
                AppError::from(e)
            })?
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::PackageNotFound, format!("Package {id} not found"))
            })?;

        let category = if package.category_id.is_empty() {
            None
        } else {
            self.store
                .get::<Category>(&package.category_id)
                .await
                .unwrap_or_else(|e| {
                    tracing::error!(id = %package.category_id, error = %e, "Failed to load category");
                    None
                })
        };

        let related = if package.category_id.is_empty() {
            Vec::new()
        } else {
            self.collection::<Package>()
                .await
                .into_iter()
                .filter(|p| p.id != package.id && p.category_id == package.category_id)
                .take(RELATED_LIMIT)
                .collect()
        };

        Ok(PackageDetailProps {
            package,
            category,
            related,
        })
    }

    pub async fn faq(&self) -> FaqProps {
        FaqProps {
            content: self.page_content::<FaqContent>().await,
            groups: group_faq(self.collection::<FaqItem>().await),
        }
    }

    pub async fn gallery(&self) -> GalleryProps {
        let content = self.page_content::<GalleryContent>().await;
        let mut categories = vec![GalleryCategory {
            id: ALL_FILTER_ID.to_string(),
            name: "All".to_string(),
        }];
        categories.extend(self.collection::<GalleryCategory>().await);

        GalleryProps {
            content,
            categories,
            images: self.collection::<GalleryImage>().await,
        }
    }

    pub async fn services(&self) -> ServicesProps {
        ServicesProps {
            content: self.page_content::<ServicesContent>().await,
            services: self.collection::<Service>().await,
        }
    }
}

/// Flagged records first (stable), truncated to `limit`.
///
/// With nothing flagged this is simply the first `limit` records.
pub fn pick_featured<T>(records: Vec<T>, featured: impl Fn(&T) -> bool, limit: usize) -> Vec<T> {
    let (mut picked, rest): (Vec<T>, Vec<T>) = records.into_iter().partition(|r| featured(r));
    picked.extend(rest);
    picked.truncate(limit);
    picked
}

/// Packages grouped under their category, in category order
pub fn group_packages(
    categories: Vec<Category>,
    packages: Vec<Package>,
) -> (Vec<CategoryGroup>, Vec<Package>) {
    let mut groups: Vec<CategoryGroup> = categories
        .into_iter()
        .map(|category| CategoryGroup {
            category,
            packages: Vec::new(),
        })
        .collect();
    let mut uncategorized = Vec::new();

    for package in packages {
        match groups
            .iter_mut()
            .find(|g| !package.category_id.is_empty() && g.category.id == package.category_id)
        {
            Some(group) => group.packages.push(package),
            None => uncategorized.push(package),
        }
    }
    (groups, uncategorized)
}

/// FAQ items grouped by category label, groups in first-seen order
pub fn group_faq(items: Vec<FaqItem>) -> Vec<FaqGroup> {
    let mut groups: Vec<FaqGroup> = Vec::new();
    for item in items {
        let label = item.group().to_string();
        match groups.iter_mut().find(|g| g.category == label) {
            Some(group) => group.items.push(item),
            None => groups.push(FaqGroup {
                category: label,
                items: vec![item],
            }),
        }
    }
    groups
}
