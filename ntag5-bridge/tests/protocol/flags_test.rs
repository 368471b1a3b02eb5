use ntag5_bridge::protocol::RequestFlags;

fn none() -> RequestFlags {
    RequestFlags::default()
}

#[test]
fn empty_and_option_only() {
    assert_eq!(none().encode(), 0x00);
    assert_eq!(
        RequestFlags {
            option: true,
            ..none()
        }
        .encode(),
        0x40
    );
}

#[test]
fn bits_5_and_4_follow_inventory() {
    let inventory = RequestFlags {
        inventory: true,
        single_slot: true,
        ..none()
    };
    assert_eq!(inventory.encode(), 0x24);

    let addressed = RequestFlags {
        address: true,
        select: true,
        ..none()
    };
    assert_eq!(addressed.encode(), 0x30);

    // the pair not chosen by `inventory` is dropped
    let ignored = RequestFlags {
        address: true,
        afi: true,
        ..none()
    };
    assert_eq!(ignored.encode(), 0x20);
}

#[test]
fn rate_and_extension_bits() {
    let f = RequestFlags {
        double_sub_carrier: true,
        high_data_rate: true,
        protocol_extension: true,
        option: true,
        ..none()
    };
    assert_eq!(f.encode(), 0x4B);
    assert_eq!(u8::from(none().addressed()), 0x20);
}

#[test]
fn bit_7_is_never_set() {
    let all = RequestFlags {
        double_sub_carrier: true,
        high_data_rate: true,
        inventory: true,
        protocol_extension: true,
        afi: true,
        single_slot: true,
        option: true,
        select: true,
        address: true,
    };
    assert_eq!(all.encode(), 0x7F);
}
