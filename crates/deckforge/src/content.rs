//! Declarative slide content for the BlockTrace pitch deck.
//!
//! Everything that appears on a slide lives here as data: copy text, stats,
//! tree labels, table rows, tiers, and phases. The rendering pass in
//! [`crate::render`] decides how each record is drawn; this module only says
//! what is on each slide.

use crate::widget::{
    CellValue,
    tree::{LevelStyle, RootStyle, TreeNode, TreeStyle},
};

/// One slide: its document name plus its content record.
#[derive(Debug, Clone)]
pub struct Slide {
    pub name: &'static str,
    pub body: SlideBody,
}

/// The content record for one slide kind.
#[derive(Debug, Clone)]
pub enum SlideBody {
    Title(TitleSlide),
    CardGrid(CardGridSlide),
    Forces(ForcesSlide),
    TokenTrees(TokenTreesSlide),
    Layers(LayersSlide),
    UseCases(UseCasesSlide),
    Comparison(ComparisonSlide),
    GoToMarket(GoToMarketSlide),
    Roadmap(RoadmapSlide),
    Closing(ClosingSlide),
}

/// The recurring slide header: section label, title, optional intro copy.
#[derive(Debug, Clone)]
pub struct Header {
    pub label: &'static str,
    pub title: &'static str,
    /// Title box width, in inches.
    pub title_width: f32,
    pub intro: Option<Intro>,
}

#[derive(Debug, Clone)]
pub struct Intro {
    pub text: &'static str,
    /// Intro box width, in inches.
    pub width: f32,
}

#[derive(Debug, Clone)]
pub struct TitleSlide {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
}

/// How a card grid is laid out and which card variant it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardGridStyle {
    /// Five slim cards in one row.
    Compact,
    /// Wide cards, three per row, last row centered.
    Brick,
    /// Brick layout with badge pills.
    Badged,
    /// Four cards with centered icon/title/body, for the vision slide.
    Centered,
}

#[derive(Debug, Clone)]
pub struct CardGridSlide {
    pub header: Header,
    pub style: CardGridStyle,
    pub cards: Vec<CardSpec>,
}

#[derive(Debug, Clone)]
pub struct CardSpec {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub badge: Option<BadgeSpec>,
    pub outlined: bool,
}

#[derive(Debug, Clone)]
pub struct BadgeSpec {
    pub text: &'static str,
    pub accent: bool,
}

#[derive(Debug, Clone)]
pub struct ForcesSlide {
    pub header: Header,
    pub pills: Vec<PillSpec>,
    pub stats: Vec<StatSpec>,
}

#[derive(Debug, Clone)]
pub struct PillSpec {
    pub text: &'static str,
    pub emphasized: bool,
}

#[derive(Debug, Clone)]
pub struct StatSpec {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone)]
pub struct TokenTreesSlide {
    pub header: Header,
    pub diagrams: Vec<TreeDiagram>,
}

/// One captioned tree diagram with its anchor position and style.
#[derive(Debug, Clone)]
pub struct TreeDiagram {
    pub caption: &'static str,
    /// Caption left edge, in inches.
    pub caption_x: f32,
    /// Root top-center x, in inches.
    pub anchor_x: f32,
    pub style: TreeStyle,
    pub root: TreeNode,
}

#[derive(Debug, Clone)]
pub struct LayersSlide {
    pub header: Header,
    pub layers: Vec<LayerSpec>,
}

#[derive(Debug, Clone)]
pub struct LayerSpec {
    pub number: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub tags: Vec<&'static str>,
    pub outlined: bool,
}

#[derive(Debug, Clone)]
pub struct UseCasesSlide {
    pub header: Header,
    pub cases: Vec<UseCaseSpec>,
}

#[derive(Debug, Clone)]
pub struct UseCaseSpec {
    pub name: &'static str,
    pub primary: bool,
    pub body: &'static str,
    pub outline: Vec<OutlineLine>,
}

/// One line of the mono asset-outline panel inside a use-case column.
#[derive(Debug, Clone)]
pub struct OutlineLine {
    pub text: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Light,
    Medium,
}

#[derive(Debug, Clone)]
pub struct ComparisonSlide {
    pub header: Header,
    pub columns: Vec<&'static str>,
    pub rows: Vec<CompareRow>,
}

#[derive(Debug, Clone)]
pub struct CompareRow {
    pub capability: &'static str,
    pub cells: Vec<CellValue>,
}

#[derive(Debug, Clone)]
pub struct GoToMarketSlide {
    pub header: Header,
    pub verticals: Vec<VerticalSpec>,
    pub tiers: Vec<TierSpec>,
    pub moats: Vec<MoatSpec>,
}

#[derive(Debug, Clone)]
pub struct VerticalSpec {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone)]
pub struct TierSpec {
    pub name: &'static str,
    pub price: &'static str,
    pub body: &'static str,
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct MoatSpec {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone)]
pub struct RoadmapSlide {
    pub header: Header,
    pub phases: Vec<PhaseSpec>,
}

#[derive(Debug, Clone)]
pub struct PhaseSpec {
    pub tag: &'static str,
    pub active: bool,
    pub title: &'static str,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ClosingSlide {
    pub quote: &'static str,
    pub brand: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

fn header(label: &'static str, title: &'static str, title_width: f32) -> Header {
    Header {
        label,
        title,
        title_width,
        intro: None,
    }
}

fn header_with_intro(
    label: &'static str,
    title: &'static str,
    title_width: f32,
    intro: &'static str,
    intro_width: f32,
) -> Header {
    Header {
        label,
        title,
        title_width,
        intro: Some(Intro {
            text: intro,
            width: intro_width,
        }),
    }
}

fn card(icon: &'static str, title: &'static str, body: &'static str) -> CardSpec {
    CardSpec {
        icon,
        title,
        body,
        badge: None,
        outlined: false,
    }
}

fn badged(
    badge: &'static str,
    accent: bool,
    icon: &'static str,
    title: &'static str,
    body: &'static str,
) -> CardSpec {
    CardSpec {
        icon,
        title,
        body,
        badge: Some(BadgeSpec {
            text: badge,
            accent,
        }),
        outlined: false,
    }
}

/// The complete 14-slide BlockTrace pitch deck.
pub fn pitch_deck() -> Vec<Slide> {
    vec![
        title_slide(),
        problem_slide(),
        opportunity_slide(),
        solution_slide(),
        how_it_works_slide(),
        why_it_matters_slide(),
        use_cases_slide(),
        integration_slide(),
        competitive_slide(),
        business_model_slide(),
        go_to_market_slide(),
        roadmap_slide(),
        vision_slide(),
        closing_slide(),
    ]
}

fn title_slide() -> Slide {
    Slide {
        name: "01 - Title",
        body: SlideBody::Title(TitleSlide {
            brand: "BlockTrace",
            tagline: "Composable Token Infrastructure for Real-World Assets",
            blurb: "Turn physical assets into verifiable digital structures with \
                    complete lifecycle traceability.",
        }),
    }
}

fn problem_slide() -> Slide {
    Slide {
        name: "02 - The Problem",
        body: SlideBody::CardGrid(CardGridSlide {
            header: header_with_intro(
                "THE PROBLEM",
                "Traceability Is Broken",
                8.0,
                "Enterprise asset data lives in fragmented silos. Compliance is manual. \
                 Cross-organisation trust is non-existent. Bills of materials are \
                 unverifiable.",
                5.0,
            ),
            style: CardGridStyle::Compact,
            cards: vec![
                card(
                    "*",
                    "Siloed Databases",
                    "Siloed enterprise databases with no interoperability. Traceability data \
                     lives across dozens of disconnected ERPs, spreadsheets, and legacy \
                     databases.",
                ),
                card(
                    "*",
                    "No Cross-Org Trust",
                    "No cross-organisation trust layer. Partners, auditors, and regulators \
                     cannot independently verify claims about asset provenance.",
                ),
                card(
                    "*",
                    "Unverifiable BOMs",
                    "Non-verifiable bills of materials. Component history is easily lost or \
                     falsified across supply chain handoffs.",
                ),
                card(
                    "*",
                    "Manual Compliance",
                    "Manual compliance and audit processes. Regulatory compliance is handled \
                     through costly, unscalable manual processes.",
                ),
                card(
                    "*",
                    "Fragmented Lifecycle",
                    "Fragmented asset lifecycle records. No single source of truth for an \
                     asset's complete history across organisations.",
                ),
            ],
        }),
    }
}

fn opportunity_slide() -> Slide {
    Slide {
        name: "03 - The Opportunity",
        body: SlideBody::Forces(ForcesSlide {
            header: header_with_intro(
                "THE OPPORTUNITY",
                "Three Forces Converging",
                8.0,
                "Regulatory pressure, enterprise SaaS maturity, and RWA tokenisation \
                 are creating an infrastructure-level opportunity.",
                5.5,
            ),
            pills: vec![
                PillSpec {
                    text: "Blockchain\nInfrastructure",
                    emphasized: false,
                },
                PillSpec {
                    text: "Verifiable\nAsset Infrastructure",
                    emphasized: true,
                },
                PillSpec {
                    text: "Enterprise SaaS\nMaturity",
                    emphasized: false,
                },
            ],
            stats: vec![
                StatSpec {
                    value: "$16T+",
                    caption: "Projected RWA tokenisation market by 2030",
                },
                StatSpec {
                    value: "80%",
                    caption: "Of enterprises cite supply chain visibility as critical priority",
                },
                StatSpec {
                    value: "47+",
                    caption: "New supply chain due diligence regulations enacted globally \
                              since 2020",
                },
            ],
        }),
    }
}

fn solution_slide() -> Slide {
    let real_estate = TreeNode::with_children(
        "House Token",
        vec![
            TreeNode::with_children(
                "Survey Token",
                vec![TreeNode::new("Site Plan"), TreeNode::new("Boundary Report")],
            ),
            TreeNode::new("Electrical Certificate"),
            TreeNode::new("Renovation Record"),
            TreeNode::new("Insurance Policy"),
        ],
    );
    let manufacturing = TreeNode::with_children(
        "Finished Product",
        vec![
            TreeNode::with_children(
                "Sub-Assembly A",
                vec![TreeNode::new("Component A1"), TreeNode::new("Component A2")],
            ),
            TreeNode::with_children(
                "Quality Certificate",
                vec![
                    TreeNode::new("Lab Test Report"),
                    TreeNode::new("Compliance Cert"),
                ],
            ),
            TreeNode::new("Shipping Manifest"),
        ],
    );

    Slide {
        name: "04 - The Solution",
        body: SlideBody::TokenTrees(TokenTreesSlide {
            header: header_with_intro(
                "THE SOLUTION",
                "From Flat Records to Composable Asset Graphs",
                9.0,
                "A real-world asset becomes a root token. Each certificate, component, \
                 or document is a sub-token. Each sub-token can itself contain \
                 sub-tokens \u{2014} forming a verifiable, composable structure.",
                5.0,
            ),
            diagrams: vec![
                TreeDiagram {
                    caption: "REAL ESTATE EXAMPLE",
                    caption_x: 0.83,
                    anchor_x: 3.43,
                    style: TreeStyle {
                        root: RootStyle::Filled,
                        ..TreeStyle::default()
                    },
                    root: real_estate,
                },
                TreeDiagram {
                    caption: "MANUFACTURING EXAMPLE",
                    caption_x: 7.0,
                    anchor_x: 9.6,
                    style: TreeStyle {
                        root: RootStyle::Outlined,
                        levels: vec![
                            LevelStyle {
                                width: 2.6,
                                height: 0.45,
                                font_size: 13.0,
                                gap: 0.12,
                            },
                            LevelStyle {
                                width: 1.55,
                                height: 0.38,
                                font_size: 10.0,
                                gap: 0.15,
                            },
                            LevelStyle {
                                width: 1.1,
                                height: 0.32,
                                font_size: 9.0,
                                gap: 0.1,
                            },
                        ],
                        row_gap: 0.5,
                    },
                    root: manufacturing,
                },
            ],
        }),
    }
}

fn how_it_works_slide() -> Slide {
    Slide {
        name: "05 - How It Works",
        body: SlideBody::Layers(LayersSlide {
            header: header_with_intro(
                "HOW IT WORKS",
                "A Layered Architecture Built for Enterprise",
                10.0,
                "Five purpose-built layers work together to tokenise, anchor, and query \
                 your asset data \u{2014} without replacing existing systems.",
                5.5,
            ),
            layers: vec![
                LayerSpec {
                    number: "1",
                    title: "Integration Layer",
                    body: "REST APIs, ERP connectors, webhooks, batch import. Enterprise systems \
                           push asset data in.",
                    tags: vec!["REST API", "ERP", "Webhooks"],
                    outlined: false,
                },
                LayerSpec {
                    number: "2",
                    title: "Tokenisation Engine",
                    body: "Hierarchical token pack creation, versioning, composition. Schema \
                           validation and lifecycle event tracking.",
                    tags: vec!["Core"],
                    outlined: true,
                },
                LayerSpec {
                    number: "3",
                    title: "Off-Chain Indexed Data Layer",
                    body: "Structured storage, fast retrieval, selective disclosure. Full asset \
                           graph traversal.",
                    tags: vec!["Indexed"],
                    outlined: false,
                },
                LayerSpec {
                    number: "4",
                    title: "On-Chain Hash Anchoring",
                    body: "Immutable proof on any blockchain, chain-agnostic. Tamper-evident, \
                           cryptographic audit trail.",
                    tags: vec!["Chain-Agnostic"],
                    outlined: false,
                },
                LayerSpec {
                    number: "5",
                    title: "Query & Analytics Dashboard",
                    body: "Real-time asset insights, dependency maps, lifecycle views. Compliance \
                           reporting and event monitoring.",
                    tags: vec!["Dashboard"],
                    outlined: false,
                },
            ],
        }),
    }
}

fn why_it_matters_slide() -> Slide {
    Slide {
        name: "06 - Why Token Packs Matter",
        body: SlideBody::CardGrid(CardGridSlide {
            header: header_with_intro(
                "WHY IT MATTERS",
                "Why Hierarchical Token Packs Matter",
                8.0,
                "Hierarchical Token Packs enable capabilities that flat tokenisation \
                 systems simply cannot deliver.",
                5.5,
            ),
            style: CardGridStyle::Brick,
            cards: vec![
                card(
                    "*",
                    "Recursive Provenance",
                    "Trace any component back through its full history, across every \
                     level of assembly.",
                ),
                card(
                    "*",
                    "Component-Level Recall",
                    "Identify and isolate affected assets instantly when a component \
                     is recalled.",
                ),
                card(
                    "*",
                    "Full Lifecycle Versioning",
                    "Every change to an asset or sub-token is versioned, timestamped, \
                     and immutable.",
                ),
                card(
                    "*",
                    "Verifiable BOM",
                    "Cryptographically verify every bill of materials down to the \
                     component level.",
                ),
                card(
                    "*",
                    "Audit-Ready Assets",
                    "Generate compliance reports instantly with cryptographic proof of \
                     every claim.",
                ),
            ],
        }),
    }
}

fn use_cases_slide() -> Slide {
    fn outline(
        root: &'static str,
        mid1: &'static str,
        mid2: &'static str,
        last: &'static str,
    ) -> Vec<OutlineLine> {
        vec![
            OutlineLine {
                text: root,
                tone: Tone::Accent,
            },
            OutlineLine {
                text: mid1,
                tone: Tone::Light,
            },
            OutlineLine {
                text: mid2,
                tone: Tone::Light,
            },
            OutlineLine {
                text: last,
                tone: Tone::Medium,
            },
        ]
    }

    Slide {
        name: "07 - Use Cases",
        body: SlideBody::UseCases(UseCasesSlide {
            header: header("USE CASES", "Built for Asset-Heavy Industries", 8.0),
            cases: vec![
                UseCaseSpec {
                    name: "Manufacturing",
                    primary: true,
                    body: "Track sub-assemblies, components, and certifications across complex \
                           production lines.",
                    outline: outline(
                        "Engine Assembly",
                        "\u{251c}\u{2500} Cylinder Block",
                        "\u{251c}\u{2500} Crankshaft",
                        "\u{2514}\u{2500} QC Report",
                    ),
                },
                UseCaseSpec {
                    name: "Real Estate",
                    primary: false,
                    body: "Compose property tokens from surveys, certificates, and renovation \
                           records.",
                    outline: outline(
                        "Property Token",
                        "\u{251c}\u{2500} Title Deed",
                        "\u{251c}\u{2500} Survey Report",
                        "\u{2514}\u{2500} Energy Rating",
                    ),
                },
                UseCaseSpec {
                    name: "Pharmaceuticals",
                    primary: false,
                    body: "Full chain-of-custody from raw material to patient delivery with \
                           regulatory compliance.",
                    outline: outline(
                        "Drug Batch",
                        "\u{251c}\u{2500} Raw Material Cert",
                        "\u{251c}\u{2500} Lab Analysis",
                        "\u{2514}\u{2500} Chain of Custody",
                    ),
                },
                UseCaseSpec {
                    name: "Energy & Carbon",
                    primary: false,
                    body: "Verifiable carbon credits and energy asset provenance with embedded \
                           compliance.",
                    outline: outline(
                        "Carbon Credit",
                        "\u{251c}\u{2500} Project Audit",
                        "\u{251c}\u{2500} Measurement Data",
                        "\u{2514}\u{2500} Retirement Record",
                    ),
                },
            ],
        }),
    }
}

fn integration_slide() -> Slide {
    Slide {
        name: "08 - Integration",
        body: SlideBody::CardGrid(CardGridSlide {
            header: header_with_intro(
                "INTEGRATION",
                "Already Have Traceability? Even Better.",
                8.0,
                "BlockTrace doesn\u{2019}t replace your existing systems \u{2014} it makes them \
                 provable, composable, and trusted across your entire supply chain.",
                6.5,
            ),
            style: CardGridStyle::Brick,
            cards: vec![
                card(
                    "*",
                    "Complement, Not Replace",
                    "Works alongside SAP, Oracle, or custom ERP systems. No \
                     rip-and-replace \u{2014} just a trust layer on top of what you \
                     already have.",
                ),
                card(
                    "*",
                    "Cryptographic Proof Layer",
                    "Add tamper-evident, hash-verified proof on top of your existing \
                     records. Anchor to any blockchain without changing your workflow.",
                ),
                card(
                    "*",
                    "API-First Integration",
                    "REST APIs, webhooks, ERP connectors, and batch import. Connect \
                     your existing systems in days, not months.",
                ),
                card(
                    "*",
                    "Cross-Organisation Trust",
                    "Your internal system tracks your data. BlockTrace proves it to \
                     partners, regulators, and customers \u{2014} without exposing \
                     sensitive details.",
                ),
                card(
                    "*",
                    "From Flat to Composable",
                    "Transform siloed, flat records into hierarchical token packs with \
                     recursive provenance \u{2014} turning your data into a verifiable \
                     asset graph.",
                ),
            ],
        }),
    }
}

fn competitive_slide() -> Slide {
    fn row(capability: &'static str, cells: [CellValue; 4]) -> CompareRow {
        CompareRow {
            capability,
            cells: cells.to_vec(),
        }
    }

    use CellValue::{No, Partial, Yes};

    Slide {
        name: "09 - Competitive Landscape",
        body: SlideBody::Comparison(ComparisonSlide {
            header: header(
                "COMPETITIVE LANDSCAPE",
                "Infrastructure, Not Another Token Platform",
                8.0,
            ),
            columns: vec![
                "Capability",
                "Simple NFT\nPlatforms",
                "Traditional\nERP Systems",
                "Single-Layer\nRWA Platforms",
                "BlockTrace",
            ],
            rows: vec![
                row("Hierarchical token structures", [No, No, No, Yes]),
                row("Cryptographic provenance", [Partial, No, Partial, Yes]),
                row("Enterprise ERP integration", [No, Yes, No, Yes]),
                row("Recursive BOM verification", [No, No, No, Yes]),
                row("Cross-org verifiable trust", [Partial, No, Partial, Yes]),
            ],
        }),
    }
}

fn business_model_slide() -> Slide {
    Slide {
        name: "10 - Business Model",
        body: SlideBody::CardGrid(CardGridSlide {
            header: header_with_intro(
                "BUSINESS MODEL",
                "Revenue Architecture",
                8.0,
                "Five compounding revenue streams with built-in land-and-expand mechanics. \
                 Every new asset deepens platform engagement across all streams.",
                7.0,
            ),
            style: CardGridStyle::Badged,
            cards: vec![
                badged(
                    "RECURRING",
                    true,
                    "*",
                    "SaaS Subscription",
                    "Tiered platform access: Starter, Growth, and Enterprise plans. \
                     Predictable ARR base that grows with seat count and org adoption. \
                     85%+ gross margins.",
                ),
                badged(
                    "USAGE-BASED",
                    false,
                    "*",
                    "Token Minting Fees",
                    "Per-token fee for each asset or sub-token created. Revenue scales \
                     linearly with asset volume \u{2014} a single enterprise can mint \
                     10K\u{2013}1M+ tokens annually. Volume discounts drive lock-in.",
                ),
                badged(
                    "USAGE-BASED",
                    false,
                    "*",
                    "On-Chain Anchoring Fees",
                    "Per-event fee for immutable proof anchoring. Batched for cost \
                     efficiency. High-margin revenue stream \u{2014} our cost per anchor \
                     is a fraction of what customers pay.",
                ),
                badged(
                    "HIGH-VALUE",
                    false,
                    "*",
                    "Enterprise Deployments",
                    "6-figure+ ACV for private cloud, on-premise, and hybrid \
                     deployments with dedicated support and SLA guarantees. Custom \
                     integrations create deep switching costs.",
                ),
                badged(
                    "ADD-ON",
                    false,
                    "*",
                    "Analytics & Compliance",
                    "Premium add-on for asset graph analytics, automated compliance \
                     reporting, and predictive insights. Expands ACV 30\u{2013}50% per \
                     enterprise account.",
                ),
            ],
        }),
    }
}

fn go_to_market_slide() -> Slide {
    Slide {
        name: "11 - Go-To-Market",
        body: SlideBody::GoToMarket(GoToMarketSlide {
            header: header_with_intro(
                "GO-TO-MARKET",
                "Market Entry & Expansion Strategy",
                10.0,
                "Land in regulated industries where traceability is mandatory, then \
                 expand through supply chain network effects and platform stickiness.",
                6.5,
            ),
            verticals: vec![
                VerticalSpec {
                    title: "Manufacturing & Industrial",
                    body: "BOMs, quality certificates, component recall. EU Digital Product \
                           Passport mandate creates forced adoption by 2027.",
                },
                VerticalSpec {
                    title: "Real Estate & Construction",
                    body: "Property tokens, surveys, certificates. \u{a3}300B+ UK market \
                           with fragmented, paper-heavy asset trails.",
                },
                VerticalSpec {
                    title: "Pharma & Life Sciences",
                    body: "Drug serialisation, cold-chain provenance, clinical trial audit \
                           trails. FDA DSCSA compliance mandatory.",
                },
                VerticalSpec {
                    title: "Food & Agriculture",
                    body: "Farm-to-fork traceability, batch recall, sustainability \
                           certification. EU regulation driving $2B+ in compliance spend.",
                },
            ],
            tiers: vec![
                TierSpec {
                    name: "Starter",
                    price: "\u{a3}500/mo",
                    body: "Up to 1,000 tokens/mo. Single user team. Shared infrastructure. \
                           Ideal for pilots and POCs.",
                    highlighted: false,
                },
                TierSpec {
                    name: "Growth",
                    price: "\u{a3}2,500/mo",
                    body: "Up to 25,000 tokens/mo. Multi-team access. Analytics module \
                           included. Volume anchoring discounts.",
                    highlighted: false,
                },
                TierSpec {
                    name: "Enterprise",
                    price: "Custom",
                    body: "Unlimited tokens. Private infrastructure. Dedicated SLA. Custom \
                           integrations. White-glove onboarding. 6-figure ACV.",
                    highlighted: true,
                },
            ],
            moats: vec![
                MoatSpec {
                    title: "Data Gravity",
                    body: "Cryptographic graphs are non-portable",
                },
                MoatSpec {
                    title: "Network Effects",
                    body: "Each partner deepens the ecosystem",
                },
                MoatSpec {
                    title: "Regulatory Tailwinds",
                    body: "Compliance mandates drive forced adoption",
                },
            ],
        }),
    }
}

fn roadmap_slide() -> Slide {
    Slide {
        name: "12 - Roadmap",
        body: SlideBody::Roadmap(RoadmapSlide {
            header: header("ROADMAP", "Building in Phases", 8.0),
            phases: vec![
                PhaseSpec {
                    tag: "PHASE 1",
                    active: true,
                    title: "Core Token Engine",
                    items: vec![
                        "Hierarchical token minting",
                        "Pack assembly & validation",
                        "On-chain anchoring MVP",
                        "REST API & basic dashboard",
                    ],
                },
                PhaseSpec {
                    tag: "PHASE 2",
                    active: true,
                    title: "ERP Integrations",
                    items: vec![
                        "SAP & Oracle connectors",
                        "Webhook event system",
                        "Compliance reporting",
                    ],
                },
                PhaseSpec {
                    tag: "PHASE 3",
                    active: false,
                    title: "Cross-Chain Interop",
                    items: vec!["Multi-chain anchoring", "Cross-chain asset queries"],
                },
                PhaseSpec {
                    tag: "PHASE 4",
                    active: false,
                    title: "AI-Driven Analytics",
                    items: vec![
                        "Predictive asset intelligence",
                        "Automated compliance alerts",
                    ],
                },
            ],
        }),
    }
}

fn vision_slide() -> Slide {
    Slide {
        name: "13 - Long-Term Vision",
        body: SlideBody::CardGrid(CardGridSlide {
            header: header_with_intro(
                "LONG-TERM VISION",
                "Version Control for Physical Assets",
                8.0,
                "We\u{2019}re building the provenance layer for the physical world. A \
                 future where every asset has a verifiable, composable digital twin.",
                6.5,
            ),
            style: CardGridStyle::Centered,
            cards: vec![
                card(
                    "*",
                    "Global Asset\nProvenance Layer",
                    "A universal registry of verifiable asset histories across \
                     industries and borders.",
                ),
                card(
                    "*",
                    "Embedded Finance\nEnablement",
                    "Tokenised assets become programmable collateral for lending, \
                     insurance, and trade finance.",
                ),
                card(
                    "*",
                    "Automated\nCompliance",
                    "Regulatory reporting generated automatically from verifiable \
                     asset data.",
                ),
                CardSpec {
                    icon: "*",
                    title: "Cross-Industry\nComposability",
                    body: "Token packs from one industry interoperate with token packs \
                           from another.",
                    badge: None,
                    outlined: true,
                },
            ],
        }),
    }
}

fn closing_slide() -> Slide {
    Slide {
        name: "14 - Closing",
        body: SlideBody::Closing(ClosingSlide {
            quote: "\u{201c}Build Trust Into Your Assets.\u{201d}",
            brand: "BlockTrace",
            email: "contact@blocktrace.io",
            website: "www.blocktrace.io",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_fourteen_slides() {
        assert_eq!(pitch_deck().len(), 14);
    }

    #[test]
    fn test_slide_names_are_numbered_in_order() {
        for (index, slide) in pitch_deck().iter().enumerate() {
            let expected = format!("{:02} - ", index + 1);
            assert!(
                slide.name.starts_with(&expected),
                "slide {} is named '{}'",
                index,
                slide.name
            );
        }
    }

    #[test]
    fn test_brick_grids_carry_five_cards() {
        for slide in pitch_deck() {
            if let SlideBody::CardGrid(grid) = &slide.body {
                match grid.style {
                    CardGridStyle::Compact | CardGridStyle::Brick | CardGridStyle::Badged => {
                        assert_eq!(grid.cards.len(), 5, "slide '{}'", slide.name)
                    }
                    CardGridStyle::Centered => assert_eq!(grid.cards.len(), 4),
                }
            }
        }
    }

    #[test]
    fn test_comparison_rows_match_columns() {
        let deck = pitch_deck();
        let comparison = deck
            .iter()
            .find_map(|slide| match &slide.body {
                SlideBody::Comparison(c) => Some(c),
                _ => None,
            })
            .expect("deck contains the competitive landscape slide");

        for row in &comparison.rows {
            assert_eq!(row.cells.len() + 1, comparison.columns.len());
        }
    }
}
