// Synthetic data generator for demo mode and backend-failure fallback.
//
// Generated records are internally consistent: merchant averages derive from
// revenue and order counts, delivery prices follow the pricing rule, service
// prices follow the hourly-rate formula, invoice totals include 20% VAT.
// Downstream aggregation cannot distinguish generated data from live data.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::dashboard::models::{
    delivery_price, Delivery, DeliveryStatus, DeliveryType, Invoice, InvoiceItem, InvoiceStatus,
    Merchant, PackageSize, Priority, Service, ServiceCategory, ServiceStatus, ServiceType,
};

const COMPANY_NAMES: &[&str] = &[
    "TechCorp Solutions",
    "Green Energy France",
    "Digital Innovations",
    "EcoTech Services",
    "Smart Solutions",
    "Innovation Lab",
    "Sustainable Tech",
    "NextGen Systems",
    "CleanTech Partners",
    "Future Industries",
    "Modern Solutions",
    "Eco Dynamics",
    "Tech Innovators",
    "Green Solutions",
    "Digital Future",
    "Smart Industries",
    "Clean Energy Co",
    "Innovation Hub",
    "Sustainable Systems",
    "NextLevel Tech",
    "EcoSmart Solutions",
    "TechAdvantage",
    "Green Innovation",
    "Digital Excellence",
    "Smart Energy",
    "CleanTech Innovation",
    "Future Systems",
    "Modern Industries",
    "Eco Solutions",
    "Tech Partners",
    "Green Future",
    "Digital Solutions",
    "Smart Tech",
    "Innovation Systems",
    "Sustainable Future",
];

const FIRST_NAMES: &[&str] = &[
    "Jean", "Marie", "Pierre", "Sophie", "Michel", "Nathalie", "Laurent", "Isabelle", "Philippe",
    "Catherine", "Alain", "Françoise", "Nicolas", "Martine", "François", "Christine", "Patrick",
    "Sandrine", "David", "Valérie", "Christophe", "Sylvie", "Stéphane", "Anne", "Thierry",
    "Véronique", "Frédéric", "Brigitte", "Olivier", "Monique",
];

const LAST_NAMES: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau", "Simon", "Laurent", "Michel", "Garcia", "David", "Bertrand", "Roux", "Vincent",
    "Fournier", "Morel", "Girard", "André", "Lefevre", "Mercier", "Dupont", "Lambert", "Bonnet",
    "François", "Martinez", "Legrand",
];

const CITIES: &[&str] = &[
    "Paris",
    "Lyon",
    "Marseille",
    "Toulouse",
    "Nice",
    "Nantes",
    "Strasbourg",
    "Montpellier",
    "Bordeaux",
    "Lille",
    "Rennes",
    "Reims",
    "Le Havre",
    "Saint-Étienne",
    "Toulon",
    "Grenoble",
    "Dijon",
    "Angers",
    "Nîmes",
    "Villeurbanne",
    "Saint-Denis",
    "Le Mans",
    "Aix-en-Provence",
    "Clermont-Ferrand",
    "Brest",
    "Limoges",
    "Tours",
    "Amiens",
    "Perpignan",
    "Metz",
];

const BUSINESS_TYPES: &[&str] = &[
    "E-commerce",
    "Restaurant",
    "Consulting",
    "Retail",
    "Manufacturing",
    "Technology",
    "Healthcare",
    "Education",
    "Construction",
    "Transport",
    "Finance",
    "Real Estate",
    "Agriculture",
    "Tourism",
    "Entertainment",
];

const SERVICE_NAMES: &[&str] = &[
    "Salle de conférence Premium",
    "Studio d'enregistrement",
    "Atelier créatif",
    "Salle de formation",
    "Espace coworking",
    "Studio photo",
    "Cuisine professionnelle",
    "Salle de sport",
    "Théâtre privé",
    "Laboratoire",
    "Garage automobile",
    "Menuiserie",
    "Plomberie",
    "Électricité",
    "Peinture",
    "Jardinage",
    "Nettoyage bureau",
    "Nettoyage domicile",
    "Maintenance informatique",
    "Réparation électroménager",
    "Installation climatisation",
    "Déménagement",
    "Formation informatique",
    "Cours de langue",
    "Coaching professionnel",
    "Consultation juridique",
    "Service comptable",
    "Design graphique",
    "Développement web",
    "Marketing digital",
];

const STREET_TYPES: &[&str] = &["rue", "avenue", "boulevard", "place", "impasse"];

const STREET_NAMES: &[&str] = &[
    "de la Paix",
    "Victor Hugo",
    "Charles de Gaulle",
    "de la République",
    "Jean Jaurès",
    "Georges Pompidou",
    "François Mitterrand",
    "Jacques Chirac",
];

const PACKAGE_CONTENTS: &[&str] = &[
    "Documents",
    "Vêtements",
    "Électronique",
    "Livres",
    "Produits alimentaires",
    "Cosmétiques",
    "Accessoires",
    "Matériel de bureau",
    "Pièces détachées",
    "Cadeaux",
];

const DELIVERY_COMMENTS: &[&str] = &[
    "Très satisfait du service",
    "Livraison rapide et soignée",
    "Parfait !",
    "Bon service mais pourrait être amélioré",
    "Excellent livreur, très professionnel",
    "Délai respecté, merci",
    "Service correct",
    "Très bien emballé",
];

const SERVICE_FEEDBACKS: &[&str] = &[
    "Prestation de qualité, très satisfait",
    "Professionnel et ponctuel",
    "Excellent travail, je recommande",
    "Service correct mais peut mieux faire",
    "Parfait, exactement ce que j'attendais",
    "Très professionnel, merci",
    "Bon rapport qualité-prix",
    "Service rapide et efficace",
];

const EQUIPMENT_LISTS: &[&str] = &[
    "Outils professionnels",
    "Matériel de sécurité",
    "Équipement spécialisé",
    "Produits de nettoyage",
    "Matériel informatique",
    "Instruments de mesure",
];

const INVOICE_ITEM_DESCRIPTIONS: &[&str] = &[
    "Service de livraison express",
    "Frais de manutention",
    "Commission plateforme",
    "Service premium",
    "Frais de traitement",
    "Assurance colis",
    "Service standard",
];

const PAYMENT_METHODS: &[&str] = &["Virement", "Carte bancaire", "Chèque", "Espèces"];

/// Generates syntactically valid, internally consistent synthetic entities.
///
/// Record ids carry a monotonically increasing sequence per entity kind, so
/// repeated calls on one generator (including padding top-ups) never collide.
pub struct MockDataGenerator {
    rng: StdRng,
    merchant_seq: usize,
    delivery_seq: usize,
    service_seq: usize,
}

impl MockDataGenerator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            merchant_seq: 0,
            delivery_seq: 0,
            service_seq: 0,
        }
    }

    pub fn generate_merchants(&mut self, count: usize) -> Vec<Merchant> {
        debug!(count, "Generating synthetic merchants");
        (0..count).map(|_| self.generate_merchant()).collect()
    }

    pub fn generate_deliveries(&mut self, count: usize) -> Vec<Delivery> {
        debug!(count, "Generating synthetic deliveries");
        (0..count).map(|_| self.generate_delivery()).collect()
    }

    pub fn generate_services(&mut self, count: usize) -> Vec<Service> {
        debug!(count, "Generating synthetic services");
        (0..count).map(|_| self.generate_service()).collect()
    }

    fn generate_merchant(&mut self) -> Merchant {
        self.merchant_seq += 1;
        let id = format!("merchant_{}", self.merchant_seq);

        let contact_name = self.full_name();
        let company_name = self.pick(COMPANY_NAMES).to_string();
        let email = self.email(&contact_name, &company_name);

        let total_orders = self.rng.gen_range(10..510) as u64;
        // 1 000,00 € to 51 000,00 €
        let total_revenue = Decimal::new(self.rng.gen_range(100_000..=5_100_000), 2);
        let average_order_value = total_revenue / Decimal::from(total_orders);

        let registration_date = Utc::now() - Duration::days(self.rng.gen_range(0..730));
        let invoice_count = self.rng.gen_range(1..=10);
        let invoices = self.generate_invoices(&id, invoice_count);

        Merchant {
            id,
            company_name,
            contact_name,
            email,
            phone: self.phone_number(),
            address: self.street_address(),
            city: self.pick(CITIES).to_string(),
            postal_code: format!("{:05}", self.rng.gen_range(0..100_000)),
            country: "France".to_string(),
            business_type: self.pick(BUSINESS_TYPES).to_string(),
            active: self.rng.gen_bool(0.9),
            registration_date,
            last_login_date: Some(Utc::now() - Duration::days(self.rng.gen_range(0..30))),
            total_orders,
            total_revenue,
            average_order_value,
            loyalty_score: self.rng.gen_range(0.0..100.0),
            invoices,
        }
    }

    fn generate_delivery(&mut self) -> Delivery {
        self.delivery_seq += 1;

        let delivery_type = *self.pick(&DeliveryType::ALL);
        let status = *self.pick(&DeliveryStatus::ALL);
        let package_size = *self.pick(&PackageSize::ALL);
        let distance_km = self.rng.gen_range(1.0..501.0);

        let created_date = Utc::now() - Duration::days(self.rng.gen_range(0..90));
        let pickup_date = if status != DeliveryStatus::Pending {
            Some(created_date + Duration::hours(self.rng.gen_range(0..24)))
        } else {
            None
        };

        let completed = status == DeliveryStatus::Delivered;
        let actual_delivery_time = if completed {
            pickup_date.map(|pickup| pickup + Duration::hours(self.rng.gen_range(1..49)))
        } else {
            None
        };
        let rating = if completed {
            Some(self.rng.gen_range(1..=5) as f64)
        } else {
            None
        };
        let client_comment = if completed && self.rng.gen_bool(0.5) {
            Some(self.pick(DELIVERY_COMMENTS).to_string())
        } else {
            None
        };

        Delivery {
            id: format!("delivery_{}", self.delivery_seq),
            tracking_number: format!("ECO{:06}", self.delivery_seq),
            client_id: format!("client_{}", self.rng.gen_range(1..=100)),
            deliverer_id: format!("deliverer_{}", self.rng.gen_range(1..=20)),
            merchant_id: format!("merchant_{}", self.rng.gen_range(1..=35)),
            delivery_type,
            status,
            pickup_city: self.pick(CITIES).to_string(),
            pickup_address: self.street_address(),
            delivery_city: self.pick(CITIES).to_string(),
            delivery_address: self.street_address(),
            package_content: self.pick(PACKAGE_CONTENTS).to_string(),
            package_size,
            weight_kg: self.rng.gen_range(0.5..20.5),
            fragile: self.rng.gen_bool(0.5),
            priority: *self.pick(&Priority::ALL),
            distance_km,
            price: delivery_price(distance_km, package_size, delivery_type),
            currency: Default::default(),
            created_date,
            pickup_date,
            estimated_delivery_time: Some(created_date + Duration::hours(self.rng.gen_range(24..96))),
            actual_delivery_time,
            rating,
            client_comment,
        }
    }

    fn generate_service(&mut self) -> Service {
        self.service_seq += 1;

        let name = self.pick(SERVICE_NAMES).to_string();
        let status = *self.pick(&ServiceStatus::ALL);
        let duration_minutes = self.rng.gen_range(30..510) as u32;
        // 20,00 € to 100,00 € per hour
        let hourly_rate = Decimal::new(self.rng.gen_range(2_000..=10_000), 2);

        let scheduled_date = Utc::now() - Duration::days(self.rng.gen_range(0..60))
            + Duration::days(self.rng.gen_range(0..120));
        let start_time = match status {
            ServiceStatus::InProgress | ServiceStatus::Completed => Some(scheduled_date),
            _ => None,
        };
        let end_time = if status == ServiceStatus::Completed {
            Some(scheduled_date + Duration::minutes(duration_minutes as i64))
        } else {
            None
        };

        let completed = status == ServiceStatus::Completed;
        let rating = if completed && self.rng.gen_bool(0.7) {
            Some(self.rng.gen_range(1..=5) as f64)
        } else {
            None
        };
        let client_feedback = if rating.is_some() {
            Some(self.pick(SERVICE_FEEDBACKS).to_string())
        } else {
            None
        };

        let equipment_provided = self.rng.gen_bool(0.5);
        let repeat_service = self.rng.gen_bool(0.2);

        let mut service = Service {
            id: format!("service_{}", self.service_seq),
            description: format!(
                "Service professionnel de {} avec équipement moderne et prestataire expérimenté.",
                name.to_lowercase()
            ),
            name,
            service_type: *self.pick(&ServiceType::ALL),
            category: *self.pick(&ServiceCategory::ALL),
            provider_id: format!("provider_{}", self.rng.gen_range(1..=25)),
            provider_name: self.full_name(),
            client_id: format!("client_{}", self.rng.gen_range(1..=100)),
            client_name: self.full_name(),
            status,
            city: self.pick(CITIES).to_string(),
            location: self.street_address(),
            scheduled_date,
            start_time,
            end_time,
            duration_minutes,
            hourly_rate,
            price: Decimal::ZERO,
            currency: Default::default(),
            rating,
            client_feedback,
            equipment_provided,
            equipment_list: if equipment_provided {
                Some(self.pick(EQUIPMENT_LISTS).to_string())
            } else {
                None
            },
            certification_required: self.rng.gen_bool(0.3),
            repeat_service,
            repeat_frequency: if repeat_service {
                Some(
                    if self.rng.gen_bool(0.5) {
                        "WEEKLY"
                    } else {
                        "MONTHLY"
                    }
                    .to_string(),
                )
            } else {
                None
            },
            created_date: scheduled_date - Duration::days(self.rng.gen_range(0..30)),
            last_modified: Utc::now(),
        };
        service.price = service.total_price();
        service
    }

    fn generate_invoices(&mut self, merchant_id: &str, count: usize) -> Vec<Invoice> {
        let merchant_index: usize = merchant_id
            .rsplit('_')
            .next()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);

        (0..count)
            .map(|i| {
                let issue_date = Utc::now() - Duration::days(self.rng.gen_range(0..365));
                let status = *self.pick(&[
                    InvoiceStatus::Draft,
                    InvoiceStatus::Pending,
                    InvoiceStatus::Paid,
                    InvoiceStatus::Overdue,
                    InvoiceStatus::Cancelled,
                    InvoiceStatus::Refunded,
                ]);

                // 100,00 € to 2 100,00 €, plus 20% VAT
                let subtotal = Decimal::new(self.rng.gen_range(10_000..=210_000), 2);
                let tax_amount = (subtotal * Decimal::new(20, 2)).round_dp(2);

                let paid = status == InvoiceStatus::Paid;
                let item_count = self.rng.gen_range(1..=3);

                Invoice {
                    id: format!("invoice_{}_{}", merchant_id, i + 1),
                    invoice_number: format!("FAC-{:06}", merchant_index * 1000 + i + 1),
                    merchant_id: merchant_id.to_string(),
                    status,
                    issue_date,
                    due_date: issue_date + Duration::days(30),
                    paid_date: paid.then(|| issue_date + Duration::days(self.rng.gen_range(0..30))),
                    payment_method: paid.then(|| self.pick(PAYMENT_METHODS).to_string()),
                    subtotal,
                    tax_amount,
                    total_amount: subtotal + tax_amount,
                    currency: Default::default(),
                    items: self.generate_invoice_items(item_count),
                }
            })
            .collect()
    }

    fn generate_invoice_items(&mut self, count: usize) -> Vec<InvoiceItem> {
        (0..count)
            .map(|i| {
                let quantity = self.rng.gen_range(1..=5) as u32;
                // 10,00 € to 110,00 € per unit
                let unit_price = Decimal::new(self.rng.gen_range(1_000..=11_000), 2);
                InvoiceItem {
                    id: format!("item_{}", i),
                    description: self.pick(INVOICE_ITEM_DESCRIPTIONS).to_string(),
                    quantity,
                    unit_price,
                    total_price: Decimal::from(quantity) * unit_price,
                }
            })
            .collect()
    }

    fn full_name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    fn email(&mut self, contact_name: &str, company_name: &str) -> String {
        let user = contact_name.to_lowercase().replace(' ', ".");
        let domain: String = company_name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(10)
            .collect();
        format!("{}@{}.com", user, domain)
    }

    fn phone_number(&mut self) -> String {
        format!(
            "0{} {:02} {:02} {:02} {:02}",
            self.rng.gen_range(1..=6),
            self.rng.gen_range(0..100),
            self.rng.gen_range(0..100),
            self.rng.gen_range(0..100),
            self.rng.gen_range(0..100),
        )
    }

    fn street_address(&mut self) -> String {
        format!(
            "{} {} {}",
            self.rng.gen_range(1..=200),
            self.pick(STREET_TYPES),
            self.pick(STREET_NAMES),
        )
    }

    fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.rng.gen_range(0..pool.len())]
    }
}

impl Default for MockDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// How live collections shorter than the configured floor are brought up to
/// size before aggregation.
///
/// The padding behavior is deliberately pluggable: the backend contract does
/// not say whether short live data should be blended with synthetic records
/// or replaced outright, so callers can swap the strategy without touching
/// the dashboard service.
pub trait PaddingStrategy: Send + Sync {
    fn pad_merchants(&self, generator: &mut MockDataGenerator, records: &mut Vec<Merchant>, floor: usize);
    fn pad_deliveries(&self, generator: &mut MockDataGenerator, records: &mut Vec<Delivery>, floor: usize);
    fn pad_services(&self, generator: &mut MockDataGenerator, records: &mut Vec<Service>, floor: usize);
}

/// Default strategy: keep every live record and append synthetic ones until
/// the floor is reached.
pub struct TopUpWithSynthetic;

impl PaddingStrategy for TopUpWithSynthetic {
    fn pad_merchants(&self, generator: &mut MockDataGenerator, records: &mut Vec<Merchant>, floor: usize) {
        let missing = floor.saturating_sub(records.len());
        if missing > 0 {
            records.extend(generator.generate_merchants(missing));
        }
    }

    fn pad_deliveries(&self, generator: &mut MockDataGenerator, records: &mut Vec<Delivery>, floor: usize) {
        let missing = floor.saturating_sub(records.len());
        if missing > 0 {
            records.extend(generator.generate_deliveries(missing));
        }
    }

    fn pad_services(&self, generator: &mut MockDataGenerator, records: &mut Vec<Service>, floor: usize) {
        let missing = floor.saturating_sub(records.len());
        if missing > 0 {
            records.extend(generator.generate_services(missing));
        }
    }
}
