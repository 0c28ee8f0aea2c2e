// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Queue types, including the v7 CAKE and fq_codel kinds

use crate::resource::{client_wrappers, impl_resource, routeros_resource};

routeros_resource! {
    /// A queue discipline profile (`/queue/type`)
    pub struct QueueType {
        pub id: String => ".id",
        pub name: String => "name",
        pub kind: String => "kind",

        pub pcq_rate: String => "pcq-rate",
        pub pcq_classifier: Vec<String> => "pcq-classifier",
        pub pcq_limit: String => "pcq-limit",
        pub pcq_burst_rate: String => "pcq-burst-rate",
        pub pcq_burst_threshold: String => "pcq-burst-threshold",
        pub pcq_burst_time: String => "pcq-burst-time",

        pub cake_bandwidth: String => "cake-bandwidth",
        pub cake_rtt: String => "cake-rtt",
        pub cake_overhead: i64 => "cake-overhead",
        pub cake_mpu: i64 => "cake-mpu",
        pub cake_atm: String => "cake-atm",
        pub cake_nat: Option<bool> => "cake-nat",
        pub cake_ack_filter: String => "cake-ack-filter",

        pub fq_codel_limit: u32 => "fq-codel-limit",
        pub fq_codel_target: String => "fq-codel-target",
        pub fq_codel_interval: String => "fq-codel-interval",
        pub fq_codel_quantum: u32 => "fq-codel-quantum",
        pub fq_codel_ecn: Option<bool> => "fq-codel-ecn",
    }
}

impl_resource! {
    QueueType {
        kind: "queue type",
        menu: "/queue/type",
        find: "name" => name,
        delete: ".id" => id,
    }
}

client_wrappers! {
    QueueType {
        add add_queue_type;
        find find_queue_type(name);
        update update_queue_type;
        delete delete_queue_type(name);
        list list_queue_types;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::marshal;

    #[test]
    fn test_cake_queue_words() {
        let queue = QueueType {
            name: "cake-wan".to_string(),
            kind: "cake".to_string(),
            cake_bandwidth: "100M".to_string(),
            cake_nat: Some(true),
            ..Default::default()
        };
        assert_eq!(
            marshal("/queue/type/add", &queue),
            vec![
                "/queue/type/add",
                "=name=cake-wan",
                "=kind=cake",
                "=cake-bandwidth=100M",
                "=cake-nat=yes"
            ]
        );
    }
}
