//! Display labels and reference mappings for domain enums.
//!
//! Labels live in static tables with pure lookup functions, so the wire
//! variants stay plain sum types and a port of the report layer only needs
//! this file to reproduce the UI wording.

use super::delivery::{DeliveryStatus, DeliveryType, PackageSize, Priority};
use super::service::{ServiceCategory, ServiceStatus, ServiceType};

const DELIVERY_TYPE_LABELS: &[(DeliveryType, &str)] = &[
    (DeliveryType::Standard, "Standard"),
    (DeliveryType::Express, "Express"),
    (DeliveryType::SameDay, "Le jour même"),
    (DeliveryType::Scheduled, "Programmée"),
    (DeliveryType::International, "Internationale"),
];

const DELIVERY_STATUS_LABELS: &[(DeliveryStatus, &str)] = &[
    (DeliveryStatus::Pending, "En attente"),
    (DeliveryStatus::Accepted, "Acceptée"),
    (DeliveryStatus::PickupInProgress, "Collecte en cours"),
    (DeliveryStatus::InTransit, "En transit"),
    (DeliveryStatus::OutForDelivery, "En cours de livraison"),
    (DeliveryStatus::Delivered, "Livrée"),
    (DeliveryStatus::Failed, "Échouée"),
    (DeliveryStatus::Cancelled, "Annulée"),
    (DeliveryStatus::Returned, "Retournée"),
];

const PACKAGE_SIZE_LABELS: &[(PackageSize, &str)] = &[
    (PackageSize::Small, "Petit"),
    (PackageSize::Medium, "Moyen"),
    (PackageSize::Large, "Grand"),
    (PackageSize::ExtraLarge, "Très grand"),
];

const PRIORITY_LABELS: &[(Priority, &str)] = &[
    (Priority::Low, "Basse"),
    (Priority::Normal, "Normale"),
    (Priority::High, "Haute"),
    (Priority::Urgent, "Urgente"),
];

const SERVICE_TYPE_LABELS: &[(ServiceType, &str)] = &[
    (ServiceType::SpaceRental, "Location d'espace"),
    (ServiceType::HomeService, "Service à domicile"),
    (ServiceType::ProfessionalService, "Service professionnel"),
    (ServiceType::Training, "Formation"),
    (ServiceType::Maintenance, "Maintenance"),
];

const SERVICE_CATEGORY_LABELS: &[(ServiceCategory, &str)] = &[
    (ServiceCategory::Cleaning, "Nettoyage"),
    (ServiceCategory::Repair, "Réparation"),
    (ServiceCategory::Installation, "Installation"),
    (ServiceCategory::Consulting, "Conseil"),
    (ServiceCategory::Education, "Éducation"),
    (ServiceCategory::Wellness, "Bien-être"),
    (ServiceCategory::Transport, "Transport"),
    (ServiceCategory::Other, "Autre"),
];

const SERVICE_STATUS_LABELS: &[(ServiceStatus, &str)] = &[
    (ServiceStatus::Requested, "Demandé"),
    (ServiceStatus::Scheduled, "Planifié"),
    (ServiceStatus::Confirmed, "Confirmé"),
    (ServiceStatus::InProgress, "En cours"),
    (ServiceStatus::Completed, "Terminé"),
    (ServiceStatus::Cancelled, "Annulé"),
    (ServiceStatus::NoShow, "Non présenté"),
    (ServiceStatus::Rescheduled, "Reprogrammé"),
];

/// Cities known to the platform, mapped to their administrative region.
/// Unknown cities fall back to [`UNKNOWN_REGION`].
const CITY_REGIONS: &[(&str, &str)] = &[
    ("Paris", "Île-de-France"),
    ("Saint-Denis", "Île-de-France"),
    ("Lyon", "Auvergne-Rhône-Alpes"),
    ("Villeurbanne", "Auvergne-Rhône-Alpes"),
    ("Saint-Étienne", "Auvergne-Rhône-Alpes"),
    ("Grenoble", "Auvergne-Rhône-Alpes"),
    ("Clermont-Ferrand", "Auvergne-Rhône-Alpes"),
    ("Marseille", "Provence-Alpes-Côte d'Azur"),
    ("Nice", "Provence-Alpes-Côte d'Azur"),
    ("Toulon", "Provence-Alpes-Côte d'Azur"),
    ("Aix-en-Provence", "Provence-Alpes-Côte d'Azur"),
    ("Toulouse", "Occitanie"),
    ("Montpellier", "Occitanie"),
    ("Nîmes", "Occitanie"),
    ("Perpignan", "Occitanie"),
    ("Nantes", "Pays de la Loire"),
    ("Angers", "Pays de la Loire"),
    ("Le Mans", "Pays de la Loire"),
    ("Strasbourg", "Grand Est"),
    ("Reims", "Grand Est"),
    ("Metz", "Grand Est"),
    ("Bordeaux", "Nouvelle-Aquitaine"),
    ("Limoges", "Nouvelle-Aquitaine"),
    ("Lille", "Hauts-de-France"),
    ("Amiens", "Hauts-de-France"),
    ("Rennes", "Bretagne"),
    ("Brest", "Bretagne"),
    ("Le Havre", "Normandie"),
    ("Dijon", "Bourgogne-Franche-Comté"),
    ("Tours", "Centre-Val de Loire"),
];

/// Region bucket for cities absent from the reference table
pub const UNKNOWN_REGION: &str = "Autres";

fn lookup<T: PartialEq + Copy>(table: &[(T, &'static str)], value: T) -> &'static str {
    table
        .iter()
        .find(|(variant, _)| *variant == value)
        .map(|(_, label)| *label)
        .unwrap_or("Non défini")
}

pub fn delivery_type_name(value: DeliveryType) -> &'static str {
    lookup(DELIVERY_TYPE_LABELS, value)
}

pub fn delivery_status_name(value: DeliveryStatus) -> &'static str {
    lookup(DELIVERY_STATUS_LABELS, value)
}

pub fn package_size_name(value: PackageSize) -> &'static str {
    lookup(PACKAGE_SIZE_LABELS, value)
}

pub fn priority_name(value: Priority) -> &'static str {
    lookup(PRIORITY_LABELS, value)
}

pub fn service_type_name(value: ServiceType) -> &'static str {
    lookup(SERVICE_TYPE_LABELS, value)
}

pub fn service_category_name(value: ServiceCategory) -> &'static str {
    lookup(SERVICE_CATEGORY_LABELS, value)
}

pub fn service_status_name(value: ServiceStatus) -> &'static str {
    lookup(SERVICE_STATUS_LABELS, value)
}

/// Administrative region for a city, or [`UNKNOWN_REGION`] when the city is
/// not in the reference table
pub fn region_for_city(city: &str) -> &'static str {
    CITY_REGIONS
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, region)| *region)
        .unwrap_or(UNKNOWN_REGION)
}
