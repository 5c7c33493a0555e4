#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use serde_json::json;

    use hksave_core::prelude::*;
    use hksave_core::telemetry::{
        Stage, StageEvent, StageOutcome, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer,
    };

    const ENCODE_STAGES: [Stage; 5] = [Stage::Serialize, Stage::Pad, Stage::Encrypt, Stage::TextEncode, Stage::Frame];
    const DECODE_STAGES: [Stage; 6] =
        [Stage::Unframe, Stage::TextDecode, Stage::Decrypt, Stage::Unpad, Stage::Utf8, Stage::Parse];

    /// Records (stage, ok, head_len) for every event.
    #[derive(Default)]
    struct Collect {
        events: Mutex<Vec<(Stage, Option<DecodeStrategy>, bool, usize)>>,
    }

    impl CodecObserver for Collect {
        fn on_stage(&self, event: &StageEvent<'_>) {
            self.events
                .lock()
                .unwrap()
                .push((event.stage, event.strategy, event.is_ok(), event.head.len()));
        }
    }

    fn observed(observer: Arc<dyn CodecObserver>) -> SaveCodec {
        SaveCodec::default().with_observer(observer)
    }

    // ## 1️⃣ Observer hook

    #[test]
    fn encode_reports_stages_in_order() {
        let collect = Arc::new(Collect::default());
        observed(collect.clone()).encode(&json!({"geo": 1250, "health": 5})).unwrap();

        let events = collect.events.lock().unwrap();
        let stages: Vec<Stage> = events.iter().map(|e| e.0).collect();
        assert_eq!(stages, ENCODE_STAGES);
        assert!(events.iter().all(|e| e.1.is_none() && e.2));
        assert!(events.iter().all(|e| e.3 <= 32));
    }

    #[test]
    fn standard_decode_reports_stages_in_order() {
        let raw = SaveCodec::default().encode(&json!({"geo": 1250})).unwrap();
        let collect = Arc::new(Collect::default());
        observed(collect.clone()).decode(&raw).unwrap();

        let events = collect.events.lock().unwrap();
        let stages: Vec<Stage> = events.iter().map(|e| e.0).collect();
        assert_eq!(stages, DECODE_STAGES);
        assert!(events.iter().all(|e| e.1 == Some(DecodeStrategy::Standard)));
    }

    #[test]
    fn fallback_reports_failed_stage() {
        let collect = Arc::new(Collect::default());
        observed(collect.clone()).decode(b"{\"geo\": 1}").unwrap();

        let events = collect.events.lock().unwrap();
        assert_eq!(events[0], (Stage::Unframe, Some(DecodeStrategy::Standard), true, 10));
        assert_eq!(events[1], (Stage::TextDecode, Some(DecodeStrategy::Standard), false, 0));
        assert_eq!(events[2].1, Some(DecodeStrategy::RawText));
    }

    #[test]
    fn tracing_observer_without_subscriber_is_inert() {
        let codec = observed(Arc::new(TracingObserver));
        let raw = codec.encode(&json!({"geo": 1})).unwrap();
        assert_eq!(codec.decode(&raw).unwrap().document, json!({"geo": 1}));
    }

    // ## 2️⃣ Recorder

    #[test]
    fn recorder_counts_round_trip() {
        let recorder = Arc::new(TelemetryRecorder::new());
        let codec = observed(recorder.clone());
        let raw = codec.encode(&json!({"geo": 1250, "health": 5})).unwrap();
        codec.decode(&raw).unwrap();

        let snap = recorder.snapshot();
        assert_eq!(snap.counters.stages_ok, 11);
        assert_eq!(snap.counters.stages_failed, 0);
        // 23 JSON bytes in, 23 out
        assert_eq!(snap.counters.bytes_plaintext, 46);
        assert_eq!(snap.counters.bytes_ciphertext, 64);
        assert_eq!(snap.counters.bytes_container, 2 * raw.len() as u64);
        assert!((snap.cipher_overhead_ratio - 64.0 / 46.0).abs() < 1e-9);
        assert!(snap.has_all_stages(&ENCODE_STAGES));
        assert!(snap.has_all_stages(&DECODE_STAGES));
        assert!(!snap.has_all_stages(&[Stage::Repair]));
        assert!(snap.sanity_check());
    }

    #[test]
    fn recorder_counts_failures_and_repairs() {
        let recorder = Arc::new(TelemetryRecorder::new());
        let codec = observed(recorder.clone());

        codec.decode(&[0xDEu8, 0xAD, 0xBE, 0xEF, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55]).unwrap_err();
        let snap = recorder.snapshot();
        assert_eq!(snap.counters.stages_ok, 2);
        assert_eq!(snap.counters.stages_failed, 4);
        assert_eq!(snap.counters.strategies_rejected, 3);
        assert_eq!(snap.counters.repairs, 0);

        recorder.reset();
        codec.decode(b"junk {\"geo\":3} trailing").unwrap();
        assert_eq!(recorder.snapshot().counters.repairs, 1);
    }

    #[test]
    fn snapshot_serializes() {
        let recorder = TelemetryRecorder::new();
        let json = serde_json::to_string(&recorder.snapshot()).unwrap();
        assert!(json.contains("\"counters\""));
        assert!(json.contains("\"stage_times\""));
    }

    // ## 3️⃣ Building blocks

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Decrypt, Duration::from_micros(10));
        times.add(Stage::Decrypt, Duration::from_micros(5));
        times.add(Stage::Parse, Duration::from_micros(1));

        assert_eq!(times.get(Stage::Decrypt), Duration::from_micros(15));
        assert_eq!(times.get(Stage::Repair), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_micros(16));
        assert!((times.get_us(Stage::Decrypt) - 15.0).abs() < 1e-6);
        assert_eq!(times.iter().count(), 2);
    }

    #[test]
    fn counters_merge() {
        let mut a = TelemetryCounters { stages_ok: 2, bytes_plaintext: 10, ..Default::default() };
        let b = TelemetryCounters { stages_ok: 3, repairs: 1, ..Default::default() };
        a += b;
        assert_eq!(a.stages_ok, 5);
        assert_eq!(a.repairs, 1);
        assert_eq!(a.bytes_plaintext, 10);
    }

    #[test]
    fn counters_ignore_bytes_of_failed_stages() {
        let mut counters = TelemetryCounters::default();
        counters.record(&StageEvent {
            stage: Stage::Decrypt,
            strategy: Some(DecodeStrategy::Standard),
            input_len: 17,
            output_len: 0,
            elapsed: Duration::ZERO,
            outcome: StageOutcome::Failed("block alignment"),
            head: &[],
        });
        assert_eq!(counters.stages_failed, 1);
        assert_eq!(counters.strategies_rejected, 1);
        assert_eq!(counters.bytes_ciphertext, 0);
    }

    #[test]
    fn snapshot_from_empty_timer() {
        let snap = TelemetrySnapshot::from(&TelemetryCounters::default(), &TelemetryTimer::new());
        assert_eq!(snap.cipher_overhead_ratio, 0.0);
        assert_eq!(snap.total_stage_time(), Duration::ZERO);
        assert!(snap.sanity_check());
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(Stage::TextDecode.to_string(), "text-decode");
        assert_eq!(Stage::Utf8.to_string(), "utf8");
        assert_eq!(Stage::Repair.to_string(), "repair");
    }
}
