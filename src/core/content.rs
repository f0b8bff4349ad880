//! Static copy of the landing page.

/// One featured product: heading, pitch and outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub cta_label: &'static str,
    /// Tailwind gradient classes for the section background.
    pub background: &'static str,
}

pub const PRODUCTS: [Product; 3] = [
    Product {
        title: "Sweven",
        description: "Revolutionize your adtech processes with our cutting-edge innovation platform. \
                      Stay ahead of the curve and drive growth with AI-powered insights and automation.",
        href: "https://www.getsweven.com/",
        cta_label: "Explore Sweven",
        background: "bg-gradient-to-b from-gray-800 to-gray-700",
    },
    Product {
        title: "12twelve",
        description: "Enhance team productivity with our state-of-the-art collaboration suite. \
                      Break down silos, streamline communication, and boost efficiency across your organization.",
        href: "https://www.my12twelve.com/",
        cta_label: "Discover 12twelve",
        background: "bg-gradient-to-b from-gray-700 to-gray-600",
    },
    Product {
        title: "Peen",
        description: "Share your ideas and engage with your audience through our feature-rich blogging platform. \
                      Create stunning content, build a loyal readership, and grow your online presence effortlessly.",
        href: "https://blogging-pink.vercel.app/",
        cta_label: "Try Peen",
        background: "bg-gradient-to-b from-gray-600 to-gray-500",
    },
];

pub struct Hero {
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub background: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Transform Your Digital World",
    subtitle: "Discover our trio of powerful platforms designed to revolutionize your business",
    background: "bg-gradient-to-b from-gray-900 to-gray-800",
};

/// Footer call to action. `href` is `None` while no destination exists,
/// in which case the link renders but does not navigate.
pub struct FooterCta {
    pub heading: &'static str,
    pub body: &'static str,
    pub label: &'static str,
    pub href: Option<&'static str>,
}

pub const FOOTER: FooterCta = FooterCta {
    heading: "Ready to Transform Your Business?",
    body: "Harness the power of our innovative platforms and start your digital revolution today.",
    label: "Get Started Now",
    href: None,
};

pub const PAGE_TITLE: &str = "Transform Your Digital World";
pub const PAGE_DESCRIPTION: &str =
    "Sweven, 12twelve and Peen: three platforms for adtech, collaboration and publishing.";
