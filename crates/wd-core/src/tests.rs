//! Unit tests for wd-core primitives.

#[cfg(test)]
mod geo {
    use crate::{Coordinate, CoreError, km_to_miles};

    #[test]
    fn zero_distance_to_self() {
        let p = Coordinate::new(36.1699, -115.1398).unwrap();
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = Coordinate::new(30.0, -88.0).unwrap();
        let b = Coordinate::new(31.0, -88.0).unwrap();
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = Coordinate::new(36.1699, -115.1398).unwrap();
        let b = Coordinate::new(36.1215, -115.1739).unwrap();
        assert_eq!(a.distance_km(b), b.distance_km(a));
        assert!(a.distance_km(b) > 0.0);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::new(90.0001, 0.0).is_err());
        assert!(Coordinate::new(-90.0001, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.0001).is_err());
        assert!(Coordinate::new(0.0, -180.0001).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
        // Boundary values are valid.
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn parse_lat_lon() {
        let p: Coordinate = "36.1699,-115.1398".parse().unwrap();
        assert_eq!(p.lat(), 36.1699);
        assert_eq!(p.lon(), -115.1398);
        // Whitespace around the comma is tolerated.
        let q: Coordinate = " 36.1699 , -115.1398 ".parse().unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "not a coordinate".parse::<Coordinate>(),
            Err(CoreError::Parse(_))
        ));
        assert!(matches!(
            "36.1699".parse::<Coordinate>(),
            Err(CoreError::Parse(_))
        ));
        // Well-formed but out of range fails with the coordinate error.
        assert!(matches!(
            "95.0,0.0".parse::<Coordinate>(),
            Err(CoreError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn miles_conversion() {
        assert!((km_to_miles(1.609_344) - 1.0).abs() < 1e-12);
        assert!((km_to_miles(10.0) - 6.213_712).abs() < 1e-5);
    }
}

#[cfg(test)]
mod bssid {
    use crate::Bssid;

    #[test]
    fn ordering_is_numeric() {
        assert!(Bssid(0) < Bssid(1));
        assert!(Bssid(0x00_11_22_33_44_55) < Bssid(0x00_11_22_33_44_56));
    }

    #[test]
    fn display_roundtrip() {
        let b = Bssid(0xaa_bb_cc_dd_ee_ff);
        assert_eq!(b.to_string(), "aa:bb:cc:dd:ee:ff");
        assert_eq!("aa:bb:cc:dd:ee:ff".parse::<Bssid>().unwrap(), b);
    }

    #[test]
    fn parse_hyphenated_and_uppercase() {
        let b: Bssid = "AA-BB-CC-DD-EE-FF".parse().unwrap();
        assert_eq!(b, Bssid(0xaa_bb_cc_dd_ee_ff));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("aa:bb:cc:dd:ee".parse::<Bssid>().is_err()); // 5 octets
        assert!("aa:bb:cc:dd:ee:ff:00".parse::<Bssid>().is_err()); // 7 octets
        assert!("aabb:cc:dd:ee:ff".parse::<Bssid>().is_err()); // wide group
        assert!("zz:bb:cc:dd:ee:ff".parse::<Bssid>().is_err()); // not hex
        assert!("".parse::<Bssid>().is_err());
    }

    #[test]
    fn octets() {
        let b = Bssid(0x01_02_03_04_05_06);
        assert_eq!(b.octets(), [1, 2, 3, 4, 5, 6]);
    }
}

#[cfg(test)]
mod target {
    use crate::{Bssid, Coordinate, Encryption, TargetPoint};

    #[test]
    fn encryption_labels() {
        assert_eq!("open".parse::<Encryption>().unwrap(), Encryption::Open);
        assert_eq!("NONE".parse::<Encryption>().unwrap(), Encryption::Open);
        assert_eq!("wpa2".parse::<Encryption>().unwrap(), Encryption::Secure);
        assert_eq!("WEP".parse::<Encryption>().unwrap(), Encryption::Secure);
        assert_eq!(
            "[WPA2-PSK-CCMP][ESS]".parse::<Encryption>().unwrap(),
            Encryption::Secure
        );
        assert!("".parse::<Encryption>().is_err());
    }

    #[test]
    fn encryption_display() {
        assert_eq!(Encryption::Open.to_string(), "open");
        assert_eq!(Encryption::Secure.to_string(), "secure");
    }

    #[test]
    fn builder() {
        let pos = Coordinate::new(36.17, -115.14).unwrap();
        let p = TargetPoint::new(Bssid(1), pos, -67, Encryption::Open).with_ssid("coffee");
        assert_eq!(p.ssid.as_deref(), Some("coffee"));
        assert!(p.is_open());
        assert_eq!(p.signal_dbm, -67);

        let hidden = TargetPoint::new(Bssid(2), pos, -80, Encryption::Secure);
        assert!(hidden.ssid.is_none());
        assert!(!hidden.is_open());
    }
}
