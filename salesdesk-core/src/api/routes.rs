macro_rules! api_path {
    ($path:literal) => {
        concat!("/api", $path)
    };
}

/// Route definitions shared by the server and its tests.
pub mod system {
    pub const INDEX: &str = "/";
    pub const PING: &str = "/ping";
    pub const HEALTH: &str = "/health";
}

pub mod api {
    pub const ROOT: &str = "/api";

    pub mod customers {
        pub const COLLECTION: &str = api_path!("/clientes");
        pub const ITEM: &str = api_path!("/clientes/{id}");
    }

    pub mod products {
        pub const COLLECTION: &str = api_path!("/produtos");
        pub const ITEM: &str = api_path!("/produtos/{id}");
    }

    pub mod orders {
        pub const COLLECTION: &str = api_path!("/pedidos");
        pub const ITEM: &str = api_path!("/pedidos/{id}");
    }

    pub mod reports {
        pub const SALES_SUMMARY: &str = api_path!("/relatorios/resumo-vendas");
        pub const PENDING_ORDERS: &str =
            api_path!("/relatorios/pedidos-pendentes");
        pub const MOST_ACTIVE_CUSTOMERS: &str =
            api_path!("/relatorios/clientes-mais-ativos");
    }

    pub mod analysis {
        pub const ANALYZE_STRING: &str = api_path!("/analisar-string");
    }
}

/// Replaces the `{id}` segment of an item route.
pub fn with_id(template: &str, id: impl std::fmt::Display) -> String {
    template.replace("{id}", &id.to_string())
}
